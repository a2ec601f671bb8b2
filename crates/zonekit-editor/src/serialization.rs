//! Serialization and deserialization for territory files.
//!
//! Territory files are XML:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <territory-type>
//!     <territory color="4294901760" name="Wolf">
//!         <zone name="Wolf" smin="0" smax="0" dmin="1" dmax="3" x="7500" z="8200" r="80"/>
//!     </territory>
//! </territory-type>
//! ```
//!
//! Reading keeps the default for any zone attribute that is missing,
//! malformed or not a finite number, and logs the bad value. Only direct
//! children are read: `territory` under the root and `zone` under a
//! territory. UI flags such as `selected` and `visible` are never written.

use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

use zonekit_core::{FormatError, Territory, TerritoryData, Zone};

const ROOT_ELEMENT: &str = "territory-type";
const TERRITORY_ELEMENT: &[u8] = b"territory";
const ZONE_ELEMENT: &[u8] = b"zone";

/// Nesting depth inside the root element of the elements that are read.
const TERRITORY_DEPTH: usize = 1;
const ZONE_DEPTH: usize = 2;

/// Colour given to territories that carry no `color` attribute.
const UNSET_COLOR: u32 = 0;

fn xml_error(reader: &Reader<&[u8]>, err: impl std::fmt::Display) -> FormatError {
    FormatError::Xml {
        position: reader.buffer_position() as u64,
        message: err.to_string(),
    }
}

fn invalid_attr(element: &str, attribute: &str, value: &str) -> FormatError {
    FormatError::InvalidAttribute {
        element: element.to_string(),
        attribute: attribute.to_string(),
        value: value.to_string(),
    }
}

fn parse_attr<T: FromStr>(element: &str, attribute: &str, value: &str) -> Result<T, FormatError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| invalid_attr(element, attribute, value))
}

fn parse_finite(element: &str, attribute: &str, value: &str) -> Result<f64, FormatError> {
    let parsed: f64 = parse_attr(element, attribute, value)?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(invalid_attr(element, attribute, value))
    }
}

fn set_or_keep<T>(field: &mut T, parsed: Result<T, FormatError>) {
    match parsed {
        Ok(value) => *field = value,
        Err(err) => warn!(error = %err, "keeping default for zone attribute"),
    }
}

/// Collects `(name, value)` pairs of an element with entities unescaped.
fn attributes(reader: &Reader<&[u8]>, e: &BytesStart<'_>) -> Result<Vec<(String, String)>, FormatError> {
    let mut out = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| xml_error(reader, err))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| xml_error(reader, err))?
            .into_owned();
        out.push((key, value));
    }
    Ok(out)
}

fn parse_territory(reader: &Reader<&[u8]>, e: &BytesStart<'_>) -> Result<Territory, FormatError> {
    let mut territory = Territory::new(String::new(), UNSET_COLOR);
    for (key, value) in attributes(reader, e)? {
        match key.as_str() {
            "color" => territory.color = parse_attr("territory", "color", &value)?,
            "name" => territory.name = value,
            _ => {}
        }
    }
    Ok(territory)
}

fn parse_zone(reader: &Reader<&[u8]>, e: &BytesStart<'_>) -> Result<Zone, FormatError> {
    let mut zone = Zone::default();
    for (key, value) in attributes(reader, e)? {
        match key.as_str() {
            "name" => zone.name = value,
            "smin" => set_or_keep(&mut zone.smin, parse_attr("zone", "smin", &value)),
            "smax" => set_or_keep(&mut zone.smax, parse_attr("zone", "smax", &value)),
            "dmin" => set_or_keep(&mut zone.dmin, parse_attr("zone", "dmin", &value)),
            "dmax" => set_or_keep(&mut zone.dmax, parse_attr("zone", "dmax", &value)),
            "x" => set_or_keep(&mut zone.x, parse_finite("zone", "x", &value)),
            "z" => set_or_keep(&mut zone.z, parse_finite("zone", "z", &value)),
            "r" => set_or_keep(&mut zone.r, parse_finite("zone", "r", &value)),
            "h" => set_or_keep(&mut zone.h, parse_finite("zone", "h", &value)),
            _ => {}
        }
    }
    Ok(zone)
}

/// Closes a territory: empty ones are dropped, nameless ones are named after
/// their first zone or their position in the file.
fn finish_territory(mut territory: Territory, index: usize, data: &mut TerritoryData) {
    let Some(first) = territory.zones.first() else {
        return;
    };
    if territory.name.is_empty() {
        territory.name = if first.name.is_empty() {
            format!("Territory {index}")
        } else {
            first.name.clone()
        };
    }
    data.territories.push(territory);
}

/// Parse a territory document from XML text
pub fn load_from_str(xml: &str) -> Result<TerritoryData> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut data = TerritoryData::new();
    let mut seen_root = false;
    // Number of elements open inside the root
    let mut depth = 0usize;
    let mut current: Option<Territory> = None;
    let mut territory_index = 0usize;

    loop {
        let event = reader.read_event().map_err(|err| xml_error(&reader, err))?;
        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let is_empty = matches!(event, Event::Empty(_));
                let name = e.name();
                let tag = name.as_ref();

                if !seen_root {
                    if tag != ROOT_ELEMENT.as_bytes() {
                        break;
                    }
                    seen_root = true;
                    if is_empty {
                        break;
                    }
                    continue;
                }

                let depth_inside = depth + 1;
                if depth_inside == TERRITORY_DEPTH && tag == TERRITORY_ELEMENT {
                    let territory = parse_territory(&reader, e)?;
                    if is_empty {
                        finish_territory(territory, territory_index, &mut data);
                        territory_index += 1;
                    } else {
                        current = Some(territory);
                    }
                } else if depth_inside == ZONE_DEPTH && tag == ZONE_ELEMENT {
                    if let Some(territory) = current.as_mut() {
                        territory.zones.push(parse_zone(&reader, e)?);
                    }
                }

                if !is_empty {
                    depth = depth_inside;
                }
            }
            Event::End(_) => {
                if depth == 0 {
                    // Root closed; anything after it is ignored
                    break;
                }
                if depth == TERRITORY_DEPTH {
                    if let Some(territory) = current.take() {
                        finish_territory(territory, territory_index, &mut data);
                        territory_index += 1;
                    }
                }
                depth -= 1;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(FormatError::MissingRoot {
            expected: ROOT_ELEMENT.to_string(),
        }
        .into());
    }
    Ok(data)
}

/// Load a territory document from a file
pub fn load_from_file(path: impl AsRef<Path>) -> Result<TerritoryData> {
    let path = path.as_ref();
    let xml = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read territory file {}", path.display()))?;
    load_from_str(&xml).with_context(|| format!("Failed to parse territory file {}", path.display()))
}

/// Serialize a territory document to XML text
pub fn save_to_string(data: &TerritoryData) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new(ROOT_ELEMENT)))?;

    for territory in &data.territories {
        let mut elem = BytesStart::new("territory");
        elem.push_attribute(("color", territory.color.to_string().as_str()));
        if !territory.name.is_empty() {
            elem.push_attribute(("name", territory.name.as_str()));
        }

        if territory.zones.is_empty() {
            writer.write_event(Event::Empty(elem))?;
            continue;
        }

        writer.write_event(Event::Start(elem))?;
        for zone in &territory.zones {
            let mut z = BytesStart::new("zone");
            z.push_attribute(("name", zone.name.as_str()));
            z.push_attribute(("smin", zone.smin.to_string().as_str()));
            z.push_attribute(("smax", zone.smax.to_string().as_str()));
            z.push_attribute(("dmin", zone.dmin.to_string().as_str()));
            z.push_attribute(("dmax", zone.dmax.to_string().as_str()));
            z.push_attribute(("x", zone.x.to_string().as_str()));
            z.push_attribute(("z", zone.z.to_string().as_str()));
            z.push_attribute(("r", zone.r.to_string().as_str()));
            if zone.h != 0.0 {
                z.push_attribute(("h", zone.h.to_string().as_str()));
            }
            writer.write_event(Event::Empty(z))?;
        }
        writer.write_event(Event::End(BytesEnd::new("territory")))?;
    }

    writer.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;
    let bytes = writer.into_inner();
    String::from_utf8(bytes).context("Serialized territory document is not valid UTF-8")
}

/// Save a territory document to a file
pub fn save_to_file(path: impl AsRef<Path>, data: &TerritoryData) -> Result<()> {
    let path = path.as_ref();
    let xml = save_to_string(data)?;
    std::fs::write(path, xml)
        .with_context(|| format!("Failed to write territory file {}", path.display()))?;
    Ok(())
}
