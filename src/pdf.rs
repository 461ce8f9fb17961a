//! PDF export: rasterized A4 pages
//!
//! The embedding shell owns DOM rasterization (a browser or webview renders
//! the document HTML offscreen); this layer slices the rendered image across
//! A4 page boundaries and assembles the slices into a PDF, one JPEG image
//! per page. Rasterization or encoding failure surfaces as an export error
//! caught at the call site; it never touches held result state.

use crate::error::{Error, Result};
use image::{imageops, DynamicImage, ExtendedColorType, Rgba, RgbaImage};

/// A4 media box in PDF points
pub const A4_WIDTH_PT: f64 = 595.28;
pub const A4_HEIGHT_PT: f64 = 841.89;

/// Default raster width: 210mm at CSS pixel density, doubled for print
/// sharpness.
pub const DEFAULT_RASTER_WIDTH_PX: u32 = 1588;

const JPEG_QUALITY: u8 = 90;

/// Renders document HTML into a single tall RGBA image. Implemented by the
/// embedding shell; tests substitute a synthetic renderer.
pub trait PageRasterizer {
    fn rasterize(&self, html: &str, width_px: u32) -> Result<RgbaImage>;
}

/// Pixel height of one A4 page at the given raster width
pub fn page_height_px(width_px: u32) -> u32 {
    ((f64::from(width_px)) * (A4_HEIGHT_PT / A4_WIDTH_PT)).round() as u32
}

/// Slices a rendered document into fixed-size page images. The final slice
/// is padded with white to a full page.
pub fn paginate(rendered: &RgbaImage) -> Vec<RgbaImage> {
    let width = rendered.width();
    let height = rendered.height();
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let page_height = page_height_px(width);
    let mut pages = Vec::new();
    let mut top = 0;
    while top < height {
        let slice_height = page_height.min(height - top);
        let slice = imageops::crop_imm(rendered, 0, top, width, slice_height).to_image();
        if slice_height == page_height {
            pages.push(slice);
        } else {
            let mut padded =
                RgbaImage::from_pixel(width, page_height, Rgba([255, 255, 255, 255]));
            imageops::overlay(&mut padded, &slice, 0, 0);
            pages.push(padded);
        }
        top += page_height;
    }
    pages
}

fn encode_page_jpeg(page: &RgbaImage) -> Result<Vec<u8>> {
    let rgb = DynamicImage::ImageRgba8(page.clone()).to_rgb8();
    let mut buf = Vec::new();
    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY)
        .encode(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
        .map_err(|e| Error::Export(format!("Failed to encode page image: {}", e)))?;
    Ok(buf)
}

struct PdfWriter {
    buf: Vec<u8>,
    // Byte offset of each object, indexed by object id - 1
    offsets: Vec<usize>,
}

impl PdfWriter {
    fn new(object_count: usize) -> Self {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"%PDF-1.4\n");
        // Binary marker comment so transports treat the file as binary
        buf.extend_from_slice(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n']);
        Self {
            buf,
            offsets: vec![0; object_count],
        }
    }

    fn add_object(&mut self, id: usize, body: &[u8]) {
        self.offsets[id - 1] = self.buf.len();
        self.buf
            .extend_from_slice(format!("{} 0 obj\n", id).as_bytes());
        self.buf.extend_from_slice(body);
        self.buf.extend_from_slice(b"\nendobj\n");
    }

    fn finish(mut self) -> Vec<u8> {
        let xref_offset = self.buf.len();
        self.buf
            .extend_from_slice(format!("xref\n0 {}\n", self.offsets.len() + 1).as_bytes());
        self.buf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &self.offsets {
            self.buf
                .extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        self.buf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                self.offsets.len() + 1,
                xref_offset
            )
            .as_bytes(),
        );
        self.buf
    }
}

/// Assembles page images into a PDF document, one full-bleed JPEG per A4
/// page.
pub fn assemble_pdf(pages: &[RgbaImage]) -> Result<Vec<u8>> {
    if pages.is_empty() {
        return Err(Error::Export("No pages to export".to_string()));
    }

    // Object layout: 1 catalog, 2 page tree, then (page, contents, image)
    // triplets.
    let object_count = 2 + pages.len() * 3;
    let mut writer = PdfWriter::new(object_count);

    writer.add_object(1, b"<< /Type /Catalog /Pages 2 0 R >>");

    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", 3 + i * 3))
        .collect();
    writer.add_object(
        2,
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        )
        .as_bytes(),
    );

    for (i, page) in pages.iter().enumerate() {
        let page_id = 3 + i * 3;
        let contents_id = page_id + 1;
        let image_id = page_id + 2;

        writer.add_object(
            page_id,
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Resources << /XObject << /Im{} {} 0 R >> >> /Contents {} 0 R >>",
                A4_WIDTH_PT, A4_HEIGHT_PT, i, image_id, contents_id
            )
            .as_bytes(),
        );

        let content = format!(
            "q\n{:.2} 0 0 {:.2} 0 0 cm\n/Im{} Do\nQ",
            A4_WIDTH_PT, A4_HEIGHT_PT, i
        );
        let mut contents_body =
            format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
        contents_body.extend_from_slice(content.as_bytes());
        contents_body.extend_from_slice(b"\nendstream");
        writer.add_object(contents_id, &contents_body);

        let jpeg = encode_page_jpeg(page)?;
        let mut image_body = format!(
            "<< /Type /XObject /Subtype /Image /Width {} /Height {} \
             /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /DCTDecode /Length {} >>\nstream\n",
            page.width(),
            page.height(),
            jpeg.len()
        )
        .into_bytes();
        image_body.extend_from_slice(&jpeg);
        image_body.extend_from_slice(b"\nendstream");
        writer.add_object(image_id, &image_body);
    }

    Ok(writer.finish())
}

/// Full export pipeline: rasterize the document, slice it into A4 pages,
/// assemble the PDF bytes.
pub fn export_pdf(
    rasterizer: &dyn PageRasterizer,
    html: &str,
    width_px: u32,
) -> Result<Vec<u8>> {
    let rendered = rasterizer.rasterize(html, width_px)?;
    let pages = paginate(&rendered);
    assemble_pdf(&pages)
}
