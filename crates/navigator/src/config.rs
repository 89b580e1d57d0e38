//! Configuration for calendar navigation and month views.

use chrono::NaiveDateTime;

use crate::error::NavigatorError;

/// Default horizontal drag distance that pages to another month.
pub const DEFAULT_GESTURE_THRESHOLD: f64 = 100.0;

/// Configuration for a [`CalendarNavigator`](crate::CalendarNavigator).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use almanac_navigator::NavigatorConfig;
///
/// let config = NavigatorConfig::new()
///     .with_show_header(false)
///     .with_gesture_threshold(80.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct NavigatorConfig {
    show_header: bool,
    initial_month: Option<NaiveDateTime>,
    gesture_threshold: f64,
}

impl NavigatorConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `show_header = true`, `initial_month = None` (the month
    /// containing "now"), `gesture_threshold = 100.0`.
    pub fn new() -> Self {
        Self {
            show_header: true,
            initial_month: None,
            gesture_threshold: DEFAULT_GESTURE_THRESHOLD,
        }
    }

    /// Sets whether rendered months carry a header title.
    pub fn with_show_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    /// Sets the month shown when a view mounts.
    pub fn with_initial_month(mut self, month: NaiveDateTime) -> Self {
        self.initial_month = Some(month);
        self
    }

    /// Sets the horizontal drag distance that triggers paging.
    pub fn with_gesture_threshold(mut self, threshold: f64) -> Self {
        self.gesture_threshold = threshold;
        self
    }

    // --- Accessors ---

    pub fn show_header(&self) -> bool {
        self.show_header
    }

    pub fn initial_month(&self) -> Option<NaiveDateTime> {
        self.initial_month
    }

    pub fn gesture_threshold(&self) -> f64 {
        self.gesture_threshold
    }

    /// Validates this configuration.
    ///
    /// The gesture threshold must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), NavigatorError> {
        if !self.gesture_threshold.is_finite() || self.gesture_threshold <= 0.0 {
            return Err(NavigatorError::InvalidThreshold {
                value: self.gesture_threshold,
            });
        }
        Ok(())
    }
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
