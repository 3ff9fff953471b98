pub(crate) const PARAMS: &str = "btc/params";
pub(crate) const ACTIVATION_HEIGHT: &str = "btc/activation_height";
