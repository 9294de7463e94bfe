use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "box-contents")]
#[command(about = "Box contents demo", long_about = None)]
pub struct Cli {
    /// Run the contents without opening a window
    #[arg(long)]
    pub headless: bool,

    /// Number of frames to simulate in headless mode
    #[arg(long, default_value_t = 60)]
    pub frames: u32,

    /// Edge length of the primary box
    #[arg(long = "box-size", default_value_t = 1.0)]
    pub box_size: f32,

    /// Start with the box hidden
    #[arg(long = "no-box")]
    pub no_box: bool,
}
