mod tokens;

pub use tokens::LATEST_SESSION;
pub use tokens::MemoryTokenStore;
pub use tokens::StoredToken;
pub use tokens::TokenStore;
