use std::fs;

use anyhow::{Context, Result};

use h261_codec::bmp::bmp_image::BmpImage;
use h261_codec::utils::arguments::{Args, Mode};
use h261_codec::{compress, decompress};

fn main() -> Result<()> {
    // parse arguments

    let args = Args::get_args();
    args.print_args();

    match args.mode {
        Mode::Compress => {
            let bmp = BmpImage::load(&args.input)
                .with_context(|| format!("could not read \"{}\"", args.input))?;
            let bytes = compress(&bmp.pixels)?;
            fs::write(&args.output, &bytes)
                .with_context(|| format!("could not write \"{}\"", args.output))?;
            println!(
                "compressed {}x{} ({} pixels) into {} bytes",
                bmp.width,
                bmp.height,
                bmp.width * bmp.height,
                bytes.len()
            );
        }
        Mode::Decompress => {
            let bytes = fs::read(&args.input)
                .with_context(|| format!("could not read \"{}\"", args.input))?;
            let raster = decompress(&bytes)?;
            BmpImage::save(&args.output, &raster)
                .with_context(|| format!("could not write \"{}\"", args.output))?;
            println!(
                "decompressed {} bytes into a {}x{} image",
                bytes.len(),
                raster.width,
                raster.height
            );
        }
        Mode::Roundtrip => {
            let bmp = BmpImage::load(&args.input)
                .with_context(|| format!("could not read \"{}\"", args.input))?;
            let bytes = compress(&bmp.pixels)?;
            let raster = decompress(&bytes)?;
            BmpImage::save(&args.output, &raster)
                .with_context(|| format!("could not write \"{}\"", args.output))?;
            println!(
                "roundtripped {}x{} through {} compressed bytes",
                bmp.width,
                bmp.height,
                bytes.len()
            );
        }
    }

    Ok(())
}
