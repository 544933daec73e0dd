/// Runtime options collected from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Suppresses the banner at startup.
    pub no_banner: bool,
    /// Quiet level. `1` hides the banner and headers, `2` hides per-item details too.
    pub quiet: u8,
    /// Wires no-op collaborators instead of the unimplemented ones.
    ///
    /// Payment, shipping and email calls are logged and reported as successful.
    pub dry_run: bool,
}
