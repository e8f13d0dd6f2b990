//! Builds an in-memory XML tree with quick-xml

use std::fs;
use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::kml::errors::{KmlError, KmlResult};
use super::node::{Node, XmlNode};

/// Reads XML text into an `XmlNode` tree
///
/// Text and CDATA sections become text nodes with whitespace preserved,
/// comments, processing instructions and the prolog are skipped. Element
/// names keep their namespace prefix (`gx:Track` stays `gx:Track`).
pub struct XmlReader;

impl XmlReader {
    /// Parse an XML document held in memory and return its root element
    pub fn parse_str(xml: &str) -> KmlResult<XmlNode> {
        let mut reader = Reader::from_str(xml);
        let mut open: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => open.push(Self::start_element(&e)?),
                Event::Empty(e) => {
                    let element = Self::start_element(&e)?;
                    Self::attach(element, &mut open, &mut root)?;
                }
                Event::End(_) => {
                    let element = open.pop().ok_or_else(|| {
                        KmlError::XmlError(format!(
                            "Unexpected closing tag at position {}",
                            reader.buffer_position()
                        ))
                    })?;
                    Self::attach(element, &mut open, &mut root)?;
                }
                Event::Text(e) => {
                    // Character data outside the root element is insignificant
                    if let Some(parent) = open.last_mut() {
                        parent.push_child(XmlNode::Text(e.unescape()?.into_owned()));
                    }
                }
                Event::CData(e) => {
                    if let Some(parent) = open.last_mut() {
                        let text = String::from_utf8(e.into_inner().into_owned())
                            .map_err(|err| KmlError::XmlError(format!("Invalid UTF-8 in CDATA: {}", err)))?;
                        parent.push_child(XmlNode::Text(text));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(unclosed) = open.last() {
            return Err(KmlError::XmlError(format!(
                "Unclosed element <{}> at end of document",
                unclosed.node_name()
            )));
        }

        root.ok_or_else(|| KmlError::XmlError("Document has no root element".to_string()))
    }

    /// Read and parse an XML file
    pub fn from_file(path: &str) -> KmlResult<XmlNode> {
        debug!("Reading XML from {}", path);
        let contents = fs::read_to_string(path)?;
        Self::parse_str(&contents)
    }

    fn start_element(start: &BytesStart) -> KmlResult<XmlNode> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut element = XmlNode::element(&name);

        for attribute in start.attributes() {
            let attribute = attribute.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute.unescape_value()?.into_owned();
            element = element.with_attribute(&key, &value);
        }

        Ok(element)
    }

    fn attach(element: XmlNode, open: &mut [XmlNode], root: &mut Option<XmlNode>) -> KmlResult<()> {
        if let Some(parent) = open.last_mut() {
            parent.push_child(element);
            return Ok(());
        }

        if root.is_some() {
            return Err(KmlError::XmlError("Document has more than one root element".to_string()));
        }
        *root = Some(element);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_text_and_attributes() {
        let root = XmlReader::parse_str(
            "<?xml version=\"1.0\"?>\n<kml><Placemark id=\"a&amp;b\"><name> Tom &amp; Jerry </name></Placemark></kml>",
        ).unwrap();

        assert_eq!(root.node_name(), "kml");
        let placemark = root.child_element("Placemark").unwrap();
        assert_eq!(placemark.attribute("id"), Some("a&b"));
        let name = placemark.child_element("name").unwrap();
        assert_eq!(name.child_nodes()[0].node_value(), Some(" Tom & Jerry "));
    }

    #[test]
    fn test_cdata_becomes_text() {
        let root = XmlReader::parse_str("<description><![CDATA[<b>bold</b>]]></description>").unwrap();
        assert_eq!(root.child_nodes()[0].node_value(), Some("<b>bold</b>"));
    }

    #[test]
    fn test_empty_elements_and_prefixes() {
        let root = XmlReader::parse_str("<kml xmlns:gx=\"http://www.google.com/kml/ext/2.2\"><gx:Track/><open/></kml>").unwrap();
        let names: Vec<_> = root.child_elements().map(|child| child.node_name()).collect();
        assert_eq!(names, vec!["gx:Track", "open"]);
        assert!(root.child_element("open").unwrap().child_nodes().is_empty());
    }

    #[test]
    fn test_malformed_documents_are_errors() {
        assert!(XmlReader::parse_str("<kml><Placemark></kml>").is_err());
        assert!(XmlReader::parse_str("<kml>").is_err());
        assert!(XmlReader::parse_str("").is_err());
        assert!(XmlReader::parse_str("<a/><b/>").is_err());
    }
}
