//! Configuration for circuit simulation
//!
//! Controls how the evaluate phase of a tick is executed and how long
//! `Simulator::run` keeps ticking.

/// Enumeration of supported concurrency modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcurrencyMode {
    /// Every phase runs in order on the calling thread
    Sequential,
    /// The evaluate phase runs on a Rayon pool; reset and propagate stay sequential
    Rayon,
}

impl Default for ConcurrencyMode {
    fn default() -> Self {
        ConcurrencyMode::Sequential
    }
}

/// Configuration for simulation execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// The concurrency mode to use for the evaluate phase
    pub concurrency_mode: ConcurrencyMode,
    /// Size of a dedicated thread pool.
    /// Only relevant when concurrency_mode is Rayon; `None` uses the global pool.
    pub thread_pool_size: Option<usize>,
    /// Number of ticks after which `run` stops
    pub max_ticks: Option<u64>,
}

impl SimulationConfig {
    /// Create a new configuration: sequential, no dedicated pool, no tick limit
    pub fn new() -> Self {
        Self {
            concurrency_mode: ConcurrencyMode::default(),
            thread_pool_size: None,
            max_ticks: None,
        }
    }

    /// Set the concurrency mode for the evaluate phase
    pub fn with_concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.concurrency_mode = mode;
        self
    }

    /// Set the thread pool size for parallel evaluation
    ///
    /// # Note
    /// This setting only affects execution when concurrency_mode is Rayon
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }

    pub fn with_max_ticks(mut self, ticks: u64) -> Self {
        self.max_ticks = Some(ticks);
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.concurrency_mode, ConcurrencyMode::Sequential);
        assert_eq!(config.thread_pool_size, None);
        assert_eq!(config.max_ticks, None);
    }

    #[test]
    fn test_config_builder() {
        let config = SimulationConfig::new()
            .with_concurrency(ConcurrencyMode::Rayon)
            .with_thread_pool_size(4)
            .with_max_ticks(100);

        assert_eq!(config.concurrency_mode, ConcurrencyMode::Rayon);
        assert_eq!(config.thread_pool_size, Some(4));
        assert_eq!(config.max_ticks, Some(100));
    }

    #[test]
    fn test_concurrency_mode_default() {
        assert_eq!(ConcurrencyMode::default(), ConcurrencyMode::Sequential);
        assert_ne!(ConcurrencyMode::Sequential, ConcurrencyMode::Rayon);
    }
}
