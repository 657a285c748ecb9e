// Copyright 2025 Crrow
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Build facts shown by `--version`, the startup log and the About page.

use shadow_rs::shadow;

shadow!(build);

/// Short commit of the build, `unknown` outside a git checkout.
#[allow(clippy::const_is_empty)]
pub const COMMIT: &str = if build::SHORT_COMMIT.is_empty() { "unknown" } else { build::SHORT_COMMIT };

/// `{version} ({commit})`, with `-dirty` when built from a modified tree.
pub const VERSION: &str = shadow_rs::formatcp!(
    "{} ({}{})",
    build::PKG_VERSION,
    COMMIT,
    if build::GIT_CLEAN { "" } else { "-dirty" }
);

/// Label and value pairs for the About page.
pub const fn facts() -> [(&'static str, &'static str); 3] {
    [
        ("Version", build::PKG_VERSION),
        ("Commit", COMMIT),
        ("Built", build::BUILD_TIME),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_leads_with_package_version_and_commit() {
        assert!(VERSION.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(VERSION.contains(COMMIT));
        assert!(!COMMIT.is_empty());
    }

    #[test]
    fn about_facts_are_labelled_and_filled() {
        let facts = facts();
        assert_eq!(facts.map(|(label, _)| label), ["Version", "Commit", "Built"]);
        assert!(facts.iter().all(|(_, value)| !value.is_empty()));
    }
}
