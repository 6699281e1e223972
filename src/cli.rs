use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "notification-hook",
    version,
    about = "Logs agent input requests and optionally announces them via text-to-speech"
)]
pub struct Cli {
    /// Speak the notification through the first available TTS helper.
    #[arg(long, default_value_t = false)]
    pub notify: bool,
}
