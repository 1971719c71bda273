pub mod bmp_image;
