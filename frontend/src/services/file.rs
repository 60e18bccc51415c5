//! Browser `File` support.

use web_sys::{Blob, File, FileList};

use crate::types::VideoSource;

impl VideoSource for File {
    fn name(&self) -> String {
        File::name(self)
    }

    fn size(&self) -> f64 {
        Blob::size(self)
    }

    fn mime_type(&self) -> String {
        Blob::type_(self)
    }
}

/// Collect the files of a picker or drop in order.
pub fn files_from_list(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
