/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

#![cfg(feature = "std")]

use std::fs;

use pmdsky_symbols::{
    addresses::{Address, Size},
    metadata::{Region, Symbol},
    render::{self, GenerateError, Generator, RenderError, RenderFormat, RenderSettings},
    table::{SymbolTable, SymbolTableBuilder},
};
use pretty_assertions::assert_eq;

fn table() -> SymbolTable {
    let mut builder = SymbolTableBuilder::new();
    builder
        .binary("overlay13")
        .set_load_address(Region::Eu, Address::new(0x0238AC80))
        .set_load_address(Region::Na, Address::new(0x0238A140))
        .set_length(Region::Eu, Size::new(0x2E80))
        .set_description_if_empty("Controls the \"personality test\".\nSee also overlay 14.")
        .add_data(
            Symbol::new("QUIZ_BORDER_COLOR_TABLE")
                .with_address(Region::Eu, Address::new(0x0238DE30))
                .with_address(Region::Na, Address::new(0x0238D3F0))
                .with_length(Region::Eu, Size::new(0x8)),
        );
    builder.build()
}

fn file_names(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|x| x.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn python_package() {
    let out = tempfile::tempdir().unwrap();
    let table = table();

    let written = Generator::new(RenderFormat::Python)
        .with_release(Some("0.10.2"))
        .generate(&table, out.path())
        .unwrap();

    assert_eq!(
        file_names(&written),
        [
            "protocol.py",
            "na.py",
            "eu.py",
            "jp.py",
            "na_itcm.py",
            "eu_itcm.py",
            "jp_itcm.py",
            "_release.py",
        ]
    );

    let release = fs::read_to_string(out.path().join("_release.py")).unwrap();
    assert_eq!(release, "RELEASE = \"0.10.2\"\n");

    let protocol = fs::read_to_string(out.path().join("protocol.py")).unwrap();
    assert!(protocol.contains("class Symbol(NamedTuple):"));

    let eu = fs::read_to_string(out.path().join("eu.py")).unwrap();
    assert!(eu.starts_with("from .protocol import Symbol\n"));
    assert!(eu.contains(
        "    description = \"Controls the 'personality test'.\\nSee also overlay 14.\"\n"
    ));
    assert!(eu.contains("    QUIZ_BORDER_COLOR_TABLE = Symbol([0x238DE30], 0x8, \"\")\n"));
    assert!(eu.contains("    loadaddress = 0x238AC80\n    length = 0x2E80\n"));
    assert!(eu.ends_with("class EuSections:\n\n    overlay13 = EuOverlay13Section\n"));

    let na = fs::read_to_string(out.path().join("na.py")).unwrap();
    assert!(na.contains("    QUIZ_BORDER_COLOR_TABLE = Symbol([0x238D3F0], None, \"\")\n"));
    assert!(na.contains("    loadaddress = 0x238A140\n    length = None\n"));
}

#[test]
fn python_package_without_release() {
    let out = tempfile::tempdir().unwrap();

    let written = Generator::new(RenderFormat::Python)
        .generate(&table(), out.path())
        .unwrap();

    assert_eq!(written.len(), 8);
    assert_eq!(file_names(&written).last().map(String::as_str), Some("_release.py"));
    let release = fs::read_to_string(out.path().join("_release.py")).unwrap();
    assert_eq!(release, "RELEASE = \"\"\n");
}

#[test]
fn release_is_python_only() {
    let out = tempfile::tempdir().unwrap();

    let written = Generator::new(RenderFormat::SymbolAddrs)
        .with_release(Some("0.10.2"))
        .generate(&table(), out.path().join("nested/dir"))
        .unwrap();

    assert_eq!(
        file_names(&written),
        ["na.ld", "eu.ld", "jp.ld", "na_itcm.ld", "eu_itcm.ld", "jp_itcm.ld"]
    );
    let eu = fs::read_to_string(out.path().join("nested/dir/eu.ld")).unwrap();
    assert_eq!(
        eu,
        "// overlay13\nQUIZ_BORDER_COLOR_TABLE = 0x238DE30; // type:data size:0x8\n"
    );
    let jp = fs::read_to_string(out.path().join("nested/dir/jp.ld")).unwrap();
    assert_eq!(jp, "// overlay13\n");
}

#[test]
fn unknown_section() {
    let table = table();
    let settings = RenderSettings::new().with_section(Some("overlay99"));

    match render::render(table.sections(Region::Eu), RenderFormat::Listing, &settings) {
        Err(RenderError::UnknownSection(e)) => {
            assert_eq!(e.name(), "overlay99");
            assert_eq!(e.region(), Region::Eu);
        }
        x => panic!("Unexpected result: {:?}", x),
    }

    let out = tempfile::tempdir().unwrap();
    let result = Generator::new(RenderFormat::Json)
        .with_settings(settings)
        .generate(&table, out.path());
    assert!(matches!(
        result,
        Err(GenerateError::Render(RenderError::UnknownSection(_)))
    ));
}

#[test]
fn json_without_descriptions() {
    let table = table();
    let settings = RenderSettings::new().with_emit_descriptions(false);

    let text = render::render(table.sections(Region::Na), RenderFormat::Json, &settings).unwrap();
    assert!(text.ends_with("}\n"));
    assert!(!text.contains("personality"));
    assert!(text.contains("\"region\": \"NA\""));
}
