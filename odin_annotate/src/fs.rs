/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::fs::File;
use std::io::{self, Read, BufWriter};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

type Result<T> = std::result::Result<T, io::Error>;

pub fn path_to_lossy_string (path: impl AsRef<Path>)->String {
    path.as_ref().to_string_lossy().to_string()
}

/// read the whole file. The file handle is closed when we return, including error paths
pub fn filepath_contents <P: AsRef<Path>> (path: &P)->Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let len = file.metadata().map( |md| md.len()).unwrap_or(0);
    let mut contents: Vec<u8> = Vec::with_capacity(len as usize);
    file.read_to_end(&mut contents)?;
    Ok(contents)
}

/// create or truncate the file at `path`
pub fn create_buffered (path: impl AsRef<Path>)->Result<BufWriter<File>> {
    let file = File::create( path.as_ref())?;
    Ok( BufWriter::new(file) )
}

/// create an anonymous file in the same directory as `path` so that it can later be renamed
/// to `path` without crossing file systems
pub fn sibling_temp_file (path: impl AsRef<Path>)->Result<NamedTempFile> {
    let dir = parent_dir( path.as_ref());
    tempfile::Builder::new().prefix(".odin_annotate-").tempfile_in( dir)
}

fn parent_dir (path: &Path)->PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from(".")
    }
}
