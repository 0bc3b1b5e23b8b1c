//! Sample translation resources and on-disk translation directories.
//!
//! The German sample mirrors the shape of real Linguist output: finished and
//! unfinished entries, an obsolete duplicate of `Plane %1`, a source string
//! that appears both with and without a disambiguation comment, a plural
//! message, and escaped markup.

use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// German catalog used across unit and behaviour tests.
pub const SAMPLE_DE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de_DE" sourcelanguage="en">
<context>
    <name>AddOperatorAction</name>
    <message>
        <location filename="../src/actions/add_operator.cpp" line="42"/>
        <source>Add operator</source>
        <translation>Operator hinzufügen</translation>
    </message>
    <message>
        <source>Add %1 to %2</source>
        <translation>%1 zu %2 hinzufügen</translation>
    </message>
</context>
<context>
    <name>ClipPlaneWidget</name>
    <message>
        <source>Plane %1</source>
        <translation type="obsolete">Ebene %1</translation>
    </message>
    <message>
        <source>Gradient color 1</source>
        <translation type="unfinished">Verlaufsfarbe 1</translation>
    </message>
    <message>
        <source>Plane %1</source>
        <translation type="unfinished"></translation>
    </message>
</context>
<context>
    <name>ExportDialog</name>
    <message>
        <source>Export options for %1 writer</source>
        <extracomment>%1 is the writer name, e.g. Silo</extracomment>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Legacy exporter</source>
        <translation type="vanished">Alter Exporter</translation>
    </message>
    <message numerus="yes">
        <source>%n file(s) written</source>
        <translation>
            <numerusform>%n Datei geschrieben</numerusform>
            <numerusform>%n Dateien geschrieben</numerusform>
        </translation>
    </message>
</context>
<context>
    <name>LayerSettings</name>
    <message>
        <source>hidden</source>
        <comment>layer visibility</comment>
        <translation>ausgeblendet</translation>
    </message>
    <message>
        <source>hidden</source>
        <translation>versteckt</translation>
    </message>
    <message>
        <source>Opacity &amp; blending &lt;advanced&gt;</source>
        <translatorcomment>keep the angle brackets</translatorcomment>
        <translation>Deckkraft &amp; Überblendung &lt;erweitert&gt;</translation>
    </message>
</context>
</TS>
"#;

/// French catalog with a single finished message, used for locale switches.
pub const SAMPLE_FR: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="fr_FR">
<context>
    <name>AddOperatorAction</name>
    <message>
        <source>Add operator</source>
        <translation>Ajouter un opérateur</translation>
    </message>
</context>
</TS>
"#;

/// A temporary directory holding `<prefix>_<locale>.ts` files.
///
/// The directory is removed when the fixture is dropped.
#[derive(Debug)]
pub struct TranslationFixture {
    _temp: TempDir,
    root: Utf8PathBuf,
}

impl TranslationFixture {
    /// Create an empty translation directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the temporary directory cannot be created or its
    /// path is not UTF-8.
    pub fn new() -> io::Result<Self> {
        let temp = tempfile::tempdir()?;
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).map_err(|path| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("temporary directory is not UTF-8: {}", path.display()),
            )
        })?;

        Ok(Self { _temp: temp, root })
    }

    /// Create a directory containing `app_de.ts` and `app_fr_FR.ts`.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory or its files cannot be written.
    pub fn with_samples() -> io::Result<Self> {
        let fixture = Self::new()?;
        fixture.write("app_de.ts", SAMPLE_DE)?;
        fixture.write("app_fr_FR.ts", SAMPLE_FR)?;
        Ok(fixture)
    }

    /// Write `contents` to `file_name` inside the directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be written.
    pub fn write(&self, file_name: &str, contents: &str) -> io::Result<Utf8PathBuf> {
        let path = self.root.join(file_name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Path of the directory.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}
