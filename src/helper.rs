// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use tempfile::TempDir;
use tempfile::tempdir;

use crate::error::Fallible;

/// A fresh empty directory, removed when the returned guard is dropped.
pub fn create_tmp_directory() -> Fallible<TempDir> {
    Ok(tempdir()?)
}

/// A temporary deck directory holding the given `(file name, content)` pairs.
pub fn create_deck_directory(files: &[(&str, &str)]) -> Fallible<TempDir> {
    let directory = create_tmp_directory()?;
    for (name, content) in files {
        std::fs::write(directory.path().join(name), content)?;
    }
    Ok(directory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_deck_directory() -> Fallible<()> {
        let directory = create_deck_directory(&[("A.txt", "q\nFLIP\na")])?;
        assert!(directory.path().join("A.txt").is_file());
        Ok(())
    }
}
