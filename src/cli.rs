use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "ball-and-cube")]
#[command(about = "Spinning wireframe cube and bouncing sphere", long_about = None)]
pub struct Cli {
    /// Suppress the periodic FPS log line
    #[arg(long, default_value = "false")]
    pub quiet: bool,
}
