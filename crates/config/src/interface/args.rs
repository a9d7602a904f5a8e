use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(
    about = "Display or edit your arc19 CLI configuration.",
    override_usage = "arc19 config [OPTIONS]"
)]
pub struct ConfigArgs {
    /// The target key to update.
    #[clap(required = false, default_value = "", hide_default_value = true)]
    pub key: String,

    /// The value to set the key to.
    #[clap(required = false, default_value = "", hide_default_value = true)]
    pub value: String,

    /// Whether to enter interactive mode.
    #[clap(long, short)]
    pub interactive: bool,
}
