// Copyright 2025 The axion Authors
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

//! Startup banner and version line.

/// Version string shown to users, taken from the package manifest.
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

const LOGO: &str = r"
                _
  ____ _ _  __ (_)____   ____
 / __  /| |/_// // __ \ / __ \
/ /_/ /_>  < / // /_/ // / / /
\__,_//_/|_|/_/ \____//_/ /_/
";

pub fn version_line() -> String {
    format!("Current axion version {VERSION}")
}

/// The logo followed by the right-aligned version line and a blank line.
pub fn banner_text() -> String {
    format!("{LOGO}\n{:>40}\n\n", version_line())
}

/// Print the banner to stdout.
pub fn print_banner() {
    print!("{}", banner_text());
}

/// Print the version line to stdout.
pub fn print_version() {
    println!("{}", version_line());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_line() {
        assert_eq!(
            version_line(),
            format!("Current axion version v{}", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn test_banner_right_aligns_version() {
        let banner = banner_text();
        let line = banner
            .lines()
            .find(|l| l.contains("Current axion version"))
            .unwrap();
        assert!(line.len() >= 40);
        assert!(line.ends_with(VERSION));
        assert!(banner.ends_with("\n\n"));
    }
}
