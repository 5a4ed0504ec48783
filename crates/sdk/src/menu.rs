//! Press-start menu movie fields

/// The main-menu movie that owns the SHiFT authentication flow
///
/// The engine calls `DoSparkAuthentication` on this object shortly after
/// the menu loads; when `should_start_spark_initialization` is set the
/// native implementation brings the SHiFT session online.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressStartMovie {
    /// `ShouldStartSparkInitialization` - gates the native authentication path
    pub should_start_spark_initialization: bool,
    /// Set by the native path once a SHiFT session has been started
    pub spark_session_started: bool,
}

impl Default for PressStartMovie {
    fn default() -> Self {
        // The engine authenticates unless a mod clears the flag first
        Self {
            should_start_spark_initialization: true,
            spark_session_started: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wants_authentication() {
        let movie = PressStartMovie::default();
        assert!(movie.should_start_spark_initialization);
        assert!(!movie.spark_session_started);
    }
}
