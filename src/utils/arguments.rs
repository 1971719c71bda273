use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Mode {
    /// BMP in, compressed bitstream out
    Compress,
    /// compressed bitstream in, BMP out
    Decompress,
    /// BMP in, compress + decompress in memory, reconstructed BMP out
    Roundtrip,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// the input file path (BMP, or a compressed stream for decompress)
    #[arg(short, long, required = true)]
    pub input: String,

    /// the output file path (optional)
    #[arg(short, long, default_value_t = String::new())]
    pub output: String,

    /// pipeline direction
    #[arg(short, long, value_enum, default_value_t = Mode::Roundtrip)]
    pub mode: Mode,
}

impl Args {
    pub fn get_args() -> Args {
        let mut args = Args::parse();

        if args.output.is_empty() {
            let stem = args
                .input
                .trim_end_matches(".bmp")
                .trim_end_matches(".h261");
            args.output = match args.mode {
                Mode::Compress => format!("{stem}.h261"),
                Mode::Decompress => format!("{stem}.bmp"),
                Mode::Roundtrip => format!("{stem}.roundtrip.bmp"),
            };
        }

        args
    }

    pub fn print_args(&self) {
        println!("input: \"{}\"", self.input);
        println!("output: \"{}\"", self.output);
        println!("mode: \"{:?}\"", self.mode);
        println!();
    }
}
