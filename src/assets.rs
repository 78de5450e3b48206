//! Grade image assets
//!
//! Resolves the image file a UI shows for a grade.

use std::path::PathBuf;

use crate::types::Grade;

const IMAGES_DIR_ENV: &str = "PASSWERIFY_IMAGES_DIR";
const DEFAULT_IMAGES_DIR: &str = "images";

/// Returns the grade images directory.
///
/// Priority:
/// 1. Environment variable `PASSWERIFY_IMAGES_DIR`
/// 2. Default path `images`
pub fn get_images_dir() -> PathBuf {
    std::env::var(IMAGES_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_IMAGES_DIR))
}

/// Returns the image path for a grade, e.g. `images/bgrade.png`.
///
/// Pure path formatting; the file is not checked for existence.
pub fn grade_image_path(grade: Grade) -> PathBuf {
    get_images_dir().join(format!("{}grade.png", grade.as_str().to_lowercase()))
}
