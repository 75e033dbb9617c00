pub(crate) const DECIMALS: u32 = 18;
pub(crate) const NAME: &str = "Gold";
pub(crate) const SYMBOL: &str = "GLD";
