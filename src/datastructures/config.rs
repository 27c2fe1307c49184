/* Immutable configuration object. */
#[derive(Debug, Clone)]
pub struct ShiftConfig {
    pub deposit_method: String,
    pub settle_method: String,
}

impl ShiftConfig {
    pub fn builder() -> ShiftConfigBuilder {
        ShiftConfigBuilder::default()
    }

    pub fn accepts_deposit(&self, method: &str) -> bool {
        self.deposit_method.eq_ignore_ascii_case(method)
    }

    pub fn accepts_settle(&self, method: &str) -> bool {
        self.settle_method.eq_ignore_ascii_case(method)
    }
}

impl Default for ShiftConfig {
    fn default() -> Self {
        ShiftConfig::builder().build()
    }
}

/* Creates the final config object.  */
pub struct ShiftConfigBuilder {
    deposit_method: String,
    settle_method: String,
}

impl Default for ShiftConfigBuilder {
    fn default() -> Self {
        ShiftConfigBuilder {
            deposit_method: "xmr".to_string(),
            settle_method: "btc".to_string(),
        }
    }
}

impl ShiftConfigBuilder {
    /// Method id the provider must report for the Monero leg.
    pub fn deposit_method(mut self, deposit_method: String) -> Self {
        self.deposit_method = deposit_method;
        self
    }

    /// Method id of the asset being bought, e.g. "btc" or "eth".
    pub fn settle_method(mut self, settle_method: String) -> Self {
        self.settle_method = settle_method;
        self
    }

    pub fn build(self) -> ShiftConfig {
        ShiftConfig {
            deposit_method: self.deposit_method,
            settle_method: self.settle_method,
        }
    }
}
