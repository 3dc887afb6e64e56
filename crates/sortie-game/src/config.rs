/// Parameters for a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Grid width in nodes.
    pub width: i32,
    /// Grid height in nodes.
    pub height: i32,
    /// Units created up front so spawning reuses them.
    pub pool_size: usize,
    /// Total number of units spawned over the session.
    pub spawn_limit: usize,
    /// Length of the sequence guarding each breakable blockade.
    pub sort_len: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 12,
            pool_size: 10,
            spawn_limit: 10,
            sort_len: 10,
        }
    }
}
