//! Python-Version: a comma-space list of `X.Y[.Z]` versions.

use super::is_digits;
use crate::diagnostic::Diagnostics;

const MAJOR_VERSIONS: [&str; 3] = ["1", "2", "3"];

pub fn check_python_version(line: usize, value: &str, diags: &mut Diagnostics) {
    for version in value.split(", ") {
        let dots = version.matches('.').count();
        if dots != 1 && dots != 2 {
            diags.push(
                line,
                format!("Python-Version must have two or three segments: {}", version),
            );
            continue;
        }

        let mut parts = version.splitn(3, '.');
        let major = parts.next().unwrap_or("");
        let minor = parts.next().unwrap_or("");
        let micro = parts.next().unwrap_or("");

        if !MAJOR_VERSIONS.contains(&major) {
            diags.push(
                line,
                format!("Python-Version major part must be 1, 2, or 3: {}", version),
            );
        }
        if !is_digits(minor) && minor != "x" {
            diags.push(
                line,
                format!("Python-Version minor part must be numeric: {}", version),
            );
        } else if minor != "0" && minor.starts_with('0') {
            diags.push(
                line,
                format!(
                    "Python-Version minor part must not have leading zeros: {}",
                    version
                ),
            );
        }

        if micro.is_empty() {
            continue;
        }
        if minor == "x" {
            diags.push(
                line,
                format!(
                    "Python-Version micro part must be empty if minor part is 'x': {}",
                    version
                ),
            );
        } else if micro != "0" && micro.starts_with('0') {
            diags.push(
                line,
                format!(
                    "Python-Version micro part must not have leading zeros: {}",
                    version
                ),
            );
        } else if !is_digits(micro) {
            diags.push(
                line,
                format!("Python-Version micro part must be numeric: {}", version),
            );
        }
    }
}
