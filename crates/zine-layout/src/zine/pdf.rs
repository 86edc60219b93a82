//! PDF assembly
//!
//! Every page is a single full-bleed JPEG image XObject sized so that the
//! raster prints at 300 DPI. No creation dates or IDs are written, so the
//! same pages always produce the same bytes.

use crate::constants::px_to_pt;
use crate::types::*;
use image::RgbImage;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use super::raster::encode_jpeg;

/// Build a PDF with one page per image, in order
pub(crate) fn build_pdf(pages: &[RgbImage], jpeg_quality: u8) -> Result<Vec<u8>> {
    if pages.is_empty() {
        return Err(ZineError::Config("No pages to write".to_string()));
    }

    let mut doc = Document::with_version("1.5");
    let pages_tree_id = doc.new_object_id();
    let mut page_refs = Vec::new();

    for page in pages {
        let page_id = add_image_page(&mut doc, page, pages_tree_id, jpeg_quality)?;
        page_refs.push(Object::Reference(page_id));
    }

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    doc.objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

fn add_image_page(
    doc: &mut Document,
    image: &RgbImage,
    parent_pages_id: ObjectId,
    jpeg_quality: u8,
) -> Result<ObjectId> {
    let (width_px, height_px) = image.dimensions();
    let width_pt = px_to_pt(width_px);
    let height_pt = px_to_pt(height_px);

    let jpeg = encode_jpeg(image, jpeg_quality)?;
    let image_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"XObject".to_vec())),
        ("Subtype", Object::Name(b"Image".to_vec())),
        ("Width", Object::Integer(width_px as i64)),
        ("Height", Object::Integer(height_px as i64)),
        ("ColorSpace", Object::Name(b"DeviceRGB".to_vec())),
        ("BitsPerComponent", Object::Integer(8)),
        ("Filter", Object::Name(b"DCTDecode".to_vec())),
    ]);
    let image_id = doc.add_object(Stream::new(image_dict, jpeg).with_compression(false));

    let mut xobjects = Dictionary::new();
    xobjects.set("Im0", Object::Reference(image_id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    // Scale the unit square image to the full page
    let content = format!("q {} 0 0 {} 0 0 cm /Im0 Do Q\n", width_pt, height_pt);
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(width_pt),
            Object::Real(height_pt),
        ]),
    );
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(doc.add_object(page_dict))
}
