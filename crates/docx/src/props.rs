//! `docProps/core.xml`: title, subject, author and language.
//!
//! docx-rs only fills in timestamps, so the part is rendered here and
//! swapped into the packed archive.

use docgen_core::{DocumentProperties, Error, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::{Cursor, Seek, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

pub const CORE_PROPS_PATH: &str = "docProps/core.xml";

fn xml_err(e: quick_xml::Error) -> Error {
    Error::XmlError(e.to_string())
}

fn zip_err(context: &str, e: zip::result::ZipError) -> Error {
    Error::ZipError(format!("{}: {}", context, e))
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_err)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_err)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_err)
}

/// Render the core properties part.
pub fn core_properties(props: &DocumentProperties) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .map_err(xml_err)?;

    let root = BytesStart::new("cp:coreProperties").with_attributes([
        (
            "xmlns:cp",
            "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
        ),
        ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
        ("xmlns:dcterms", "http://purl.org/dc/terms/"),
        ("xmlns:dcmitype", "http://purl.org/dc/dcmitype/"),
        ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
    ]);
    writer.write_event(Event::Start(root)).map_err(xml_err)?;

    if let Some(title) = &props.title {
        text_element(&mut writer, "dc:title", title)?;
    }
    if let Some(subject) = &props.subject {
        text_element(&mut writer, "dc:subject", subject)?;
    }
    if let Some(author) = &props.author {
        text_element(&mut writer, "dc:creator", author)?;
        text_element(&mut writer, "cp:lastModifiedBy", author)?;
    }
    text_element(&mut writer, "dc:language", &props.language)?;

    writer
        .write_event(Event::End(BytesEnd::new("cp:coreProperties")))
        .map_err(xml_err)?;
    Ok(writer.into_inner())
}

/// Copy `package` into `sink`, replacing its core properties with `core`.
pub fn replace_core_properties<W: Write + Seek>(package: &[u8], core: &[u8], sink: W) -> Result<W> {
    let mut archive =
        ZipArchive::new(Cursor::new(package)).map_err(|e| zip_err("Failed to reopen package", e))?;
    let mut zip = ZipWriter::new(sink);

    for idx in 0..archive.len() {
        let file = archive
            .by_index(idx)
            .map_err(|e| zip_err("Failed to read package entry", e))?;
        if file.name() == CORE_PROPS_PATH {
            continue;
        }
        let name = file.name().to_string();
        zip.raw_copy_file(file)
            .map_err(|e| zip_err(&format!("Failed to copy '{}'", name), e))?;
    }

    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(CORE_PROPS_PATH, options)
        .map_err(|e| zip_err("Failed to start core properties", e))?;
    zip.write_all(core)?;

    zip.finish()
        .map_err(|e| zip_err("Failed to finish archive", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_core_properties_escaped() {
        let props = DocumentProperties {
            title: Some("Parecer <técnico> & cia".to_string()),
            author: Some("Analista".to_string()),
            ..DocumentProperties::default()
        };
        let xml = String::from_utf8(core_properties(&props).unwrap()).unwrap();
        assert!(xml.contains("<dc:title>Parecer &lt;técnico&gt; &amp; cia</dc:title>"));
        assert!(xml.contains("<dc:creator>Analista</dc:creator>"));
        assert!(xml.contains("<dc:language>pt-BR</dc:language>"));
        assert!(!xml.contains("dc:subject"));
    }

    #[test]
    fn test_replace_core_properties_keeps_other_entries() {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default();
        zip.start_file("word/document.xml", options).unwrap();
        zip.write_all(b"<w:document/>").unwrap();
        zip.start_file(CORE_PROPS_PATH, options).unwrap();
        zip.write_all(b"<old/>").unwrap();
        let package = zip.finish().unwrap().into_inner();

        let out = replace_core_properties(&package, b"<new/>", Cursor::new(Vec::new()))
            .unwrap()
            .into_inner();

        let mut archive = ZipArchive::new(Cursor::new(out)).unwrap();
        assert_eq!(archive.len(), 2);
        let mut core = String::new();
        archive
            .by_name(CORE_PROPS_PATH)
            .unwrap()
            .read_to_string(&mut core)
            .unwrap();
        assert_eq!(core, "<new/>");
        assert!(archive.by_name("word/document.xml").is_ok());
    }
}
