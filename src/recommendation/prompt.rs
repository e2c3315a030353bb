use crate::types::Track;

/// One `"{name} - {artist}"` line per track, in input order.
pub fn render_song_list(tracks: &[Track]) -> String {
    tracks
        .iter()
        .map(|t| format!("{} - {}", t.name, t.artist))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Wraps the listening history in the fixed instruction template.
///
/// The wording is a contract with the model: JSON-only output, the field
/// names `name`, `artist` and `reason`, 10-15 entries, no repeats of the
/// input and only real songs.
pub fn build_prompt(tracks: &[Track]) -> String {
    format!(
        r#"Here is a list of songs the user has recently listened to:
{song_list}

Please generate a list of 10-15 new song recommendations that match the style, vibe, and energy of these songs.

Rules:
- Return ONLY a valid JSON array, no other text, no markdown, no explanation
- Each object must have: "name" (string), "artist" (string), "reason" (1 short sentence why it matches the vibe)
- Do NOT include duplicates of the user's previous songs
- Only include real songs that exist on mainstream music platforms
- Match the energy, tempo, and emotional tone of the input songs

Format:
[
  {{"name": "Song Name", "artist": "Artist Name", "reason": "Short vibe explanation"}},
  ...
]"#,
        song_list = render_song_list(tracks)
    )
}
