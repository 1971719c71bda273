use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};

use crate::pixel_matrix::pixel_matrix::PixelMatrix;
use crate::utils::colorspace::RgbValue;

const BMP_IMAGE_DATA_START_OFFSET: u64 = 10;
const BMP_PIXEL_WIDTH_OFFSET: u64 = 18;
const BMP_PIXEL_HEIGHT_OFFSET: u64 = 22;
const BMP_HEADERS_LEN: u32 = 54; // file header (14) + BITMAPINFOHEADER (40)

/// Uncompressed 24-bit BMP raster, the CLI's way in and out of the codec.
pub struct BmpImage {
    pub width: usize,
    pub height: usize,
    pub pixels: PixelMatrix<RgbValue>,
}

impl BmpImage {
    pub fn load(path: &str) -> io::Result<BmpImage> {
        let mut file = File::open(path)?;

        let mut magic = [0u8; 2];
        file.read_exact(&mut magic)?;
        if &magic != b"BM" {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "not a BMP file"));
        }

        let mut metadata_buffer = [0u8; 4];
        file.seek(SeekFrom::Start(BMP_IMAGE_DATA_START_OFFSET))?;
        file.read_exact(&mut metadata_buffer)?;
        let image_data_offset = LittleEndian::read_u32(&metadata_buffer);

        file.seek(SeekFrom::Start(BMP_PIXEL_WIDTH_OFFSET))?;
        file.read_exact(&mut metadata_buffer)?;
        let width = LittleEndian::read_i32(&metadata_buffer);

        file.seek(SeekFrom::Start(BMP_PIXEL_HEIGHT_OFFSET))?;
        file.read_exact(&mut metadata_buffer)?;
        let height = LittleEndian::read_i32(&metadata_buffer);

        // top-down BMPs (negative height) are not handled
        if width <= 0 || height <= 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "unsupported BMP dimensions",
            ));
        }
        let width = width as usize;
        let height = height as usize;

        file.seek(SeekFrom::Start(image_data_offset as u64))?;

        // each row is padded to a multiple of 4 bytes
        let row_bytes = (width * 3).div_ceil(4) * 4;
        let mut row_buffer = vec![0u8; row_bytes];
        let mut pixels = PixelMatrix::new_with_default(width, height);

        // rows are stored bottom to top, samples in BGR order
        for row in (0..height).rev() {
            file.read_exact(&mut row_buffer)?;
            for col in 0..width {
                pixels.set_pixel(
                    row,
                    col,
                    (
                        row_buffer[col * 3 + 2],
                        row_buffer[col * 3 + 1],
                        row_buffer[col * 3],
                    ),
                );
            }
        }

        Ok(BmpImage {
            width,
            height,
            pixels,
        })
    }

    pub fn save(path: &str, pixels: &PixelMatrix<RgbValue>) -> io::Result<()> {
        let width = pixels.width;
        let height = pixels.height;
        let row_bytes = (width * 3).div_ceil(4) * 4;
        let image_size = (row_bytes * height) as u32;

        let mut file = File::create(path)?;

        file.write_all(b"BM")?;
        file.write_u32::<LittleEndian>(BMP_HEADERS_LEN + image_size)?;
        file.write_u32::<LittleEndian>(0)?; // reserved
        file.write_u32::<LittleEndian>(BMP_HEADERS_LEN)?; // pixel data offset

        file.write_u32::<LittleEndian>(40)?; // BITMAPINFOHEADER length
        file.write_i32::<LittleEndian>(width as i32)?;
        file.write_i32::<LittleEndian>(height as i32)?;
        file.write_u16::<LittleEndian>(1)?; // color planes
        file.write_u16::<LittleEndian>(24)?; // bits per pixel
        file.write_u32::<LittleEndian>(0)?; // BI_RGB, no compression
        file.write_u32::<LittleEndian>(image_size)?;
        file.write_i32::<LittleEndian>(2835)?; // 72 dpi
        file.write_i32::<LittleEndian>(2835)?;
        file.write_u32::<LittleEndian>(0)?; // palette size
        file.write_u32::<LittleEndian>(0)?; // important colors

        let mut row_buffer = vec![0u8; row_bytes];
        for row in (0..height).rev() {
            for col in 0..width {
                let (r, g, b) = pixels.pixels[row * width + col];
                row_buffer[col * 3] = b;
                row_buffer[col * 3 + 1] = g;
                row_buffer[col * 3 + 2] = r;
            }
            file.write_all(&row_buffer)?;
        }
        Ok(())
    }
}
