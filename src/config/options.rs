// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Runtime knobs for one crawl. Defaults reproduce a plain
/// no-argument run against the live site; tests override the
/// addressing fields to point at a canned transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    /// The directory index page listing all majors.
    pub index_url: String,
    /// Origin the site's relative hrefs are concatenated onto.
    pub base_origin: String,
    /// Where advisor lines are appended.
    pub out: PathBuf,
    /// Also visit each advisor's profile page and save the biography.
    pub profiles: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            index_url: s!(INDEX_URL),
            base_origin: s!(BASE_ORIGIN),
            out: PathBuf::from(DEFAULT_OUT_FILE),
            profiles: false,
        }
    }
}

impl Params {
    /// Sibling file fed by the profile pass:
    /// "gxtcmu-yjsy.csv" → "gxtcmu-yjsy-info.csv".
    pub fn info_path(&self) -> PathBuf {
        let stem = match self.out.file_stem() {
            Some(stem) => stem.to_string_lossy().into_owned(),
            None => s!("out"),
        };
        let name = match self.out.extension() {
            Some(ext) => format!("{stem}{INFO_FILE_SUFFIX}.{}", ext.to_string_lossy()),
            None => format!("{stem}{INFO_FILE_SUFFIX}"),
        };
        self.out.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_path_inserts_suffix_before_extension() {
        let p = Params::default();
        assert_eq!(p.info_path(), PathBuf::from("gxtcmu-yjsy-info.csv"));
    }

    #[test]
    fn info_path_without_extension() {
        let p = Params { out: PathBuf::from("dump"), ..Params::default() };
        assert_eq!(p.info_path(), PathBuf::from("dump-info"));
    }

    #[test]
    fn info_path_keeps_parent_dir() {
        let p = Params { out: PathBuf::from("data/out.csv"), ..Params::default() };
        assert_eq!(p.info_path(), PathBuf::from("data/out-info.csv"));
    }
}
