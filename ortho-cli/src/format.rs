//! Output formatting and display utilities for the ortho CLI

use ortho_core::{CoefficientTable, OrthogonalFunctions, OrthogonalityReport, OrthonormalBasis};
use owo_colors::{AnsiColors, OwoColorize, Stream};
use serde::Serialize;

use crate::Args;

/// One orthonormal function in a machine-readable report
#[derive(Debug, Clone, Serialize)]
pub struct FunctionReport {
    /// Function index `i`
    pub index: usize,
    /// Symbolic expression
    pub expression: String,
    /// `alpha_i` as `±sqrt(2/k)`
    pub alpha: String,
    /// `alpha_i` as a float
    pub alpha_value: f64,
    /// Integer coefficients `a_[ij]`, as decimal strings
    pub coefficients: Vec<String>,
}

/// Full machine-readable report of a run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Number of functions
    pub num_func: usize,
    /// Index of the first function
    pub start_index: usize,
    /// Right end of the interval `[0, L]`
    pub end_interval: String,
    /// The functions
    pub functions: Vec<FunctionReport>,
    /// Orthogonality matrix, when checked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orthogonality: Option<OrthogonalityReport>,
    /// Path of the saved plot, when plotted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
}

impl RunReport {
    /// Collect the report of a computed family
    pub fn new(family: &OrthogonalFunctions) -> Self {
        let basis = family.functions();
        let var = basis.variable();
        let functions = family
            .coefficients()
            .iter()
            .zip(basis.functions())
            .map(|(row, f)| FunctionReport {
                index: row.index(),
                expression: f.display_with(&var).to_string(),
                alpha: row.alpha_text(),
                alpha_value: row.alpha().to_f64(),
                coefficients: row.coefficients().iter().map(ToString::to_string).collect(),
            })
            .collect();

        let config = family.config();
        Self {
            num_func: config.num_func,
            start_index: config.start_index,
            end_interval: config.end_interval.to_string(),
            functions,
            orthogonality: None,
            plot: None,
        }
    }
}

/// Print a section header in the style of the text report
fn print_header(args: &Args, title: &str) {
    let rule = "-".repeat(title.len());
    println_colored(args, &rule, Some(AnsiColors::Cyan));
    println_colored(args, title, Some(AnsiColors::Cyan));
    println_colored(args, &rule, Some(AnsiColors::Cyan));
    println!();
}

/// Print the symbolic functions
pub(crate) fn print_functions(args: &Args, basis: &OrthonormalBasis) {
    print_header(args, "Orthogonal functions:");
    for position in 0..basis.len() {
        if let Some(line) = basis.describe(position) {
            println!("{line}");
            println!();
        }
    }
}

/// Print the human-readable coefficient table
pub(crate) fn print_coefficients(args: &Args, table: &CoefficientTable) {
    print_header(args, "coeff of functions:");
    println!("i       alpha_[i]     a_[ij]");
    println!("------  -----------   ---------");
    for row in table {
        println!("{row}");
    }
    println!();
}

/// Print the orthogonality matrix and a status line
pub(crate) fn print_orthogonality(args: &Args, report: &OrthogonalityReport) {
    print_header(args, "Mutual inner product of functions:");
    println!("{}", report.matrix);
    println!();
    if report.all_orthonormal {
        println_colored(
            args,
            "All functions are mutually orthonormal.",
            Some(AnsiColors::Green),
        );
    } else {
        println_colored(
            args,
            &format!(
                "Functions are NOT mutually orthonormal ({} defective entries).",
                report.matrix.defects()
            ),
            Some(AnsiColors::Red),
        );
    }
}

/// Print a report as pretty JSON
pub(crate) fn print_json(report: &RunReport) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Print a report as YAML
pub(crate) fn print_yaml(report: &RunReport) -> Result<(), serde_yaml::Error> {
    print!("{}", serde_yaml::to_string(report)?);
    Ok(())
}

/// Author and license information
pub(crate) const LICENSE_TEXT: &str = "\
Author:
    Ortho Developers

License:
    BSD-3-Clause";

/// Long description shown with --help
pub(crate) const DESCRIPTION: &str = "\
Description:

    Generates a set of orthonormal functions, called phi_perp, based on the
    set of non-orthonormal functions

        phi_i(t) = t^(1/(i+1)),      i = I, ..., I+N-1

    The orthonormalized functions phi_perp_i are linear combinations of the
    functions phi_i, as

        phi_perp_i(t) = alpha_i * sum_{j=I}^{i} a_{ij} phi_j(t)

    The functions phi_perp are orthonormal in the interval [0, L] with
    respect to the weight w(t) = 1/t. That is

        int_0^L phi_perp_i(t) phi_perp_j(t) 1/t dt = delta_{ij}

    All computations are exact: alpha_i = (-1)^(i-I) sqrt(2/(i+1)) and the
    a_{ij} are integers.

Output:

    1. The symbolic functions
    2. The coefficients alpha and a of the functions
    3. The matrix of mutual inner products (with -c)
    4. An SVG plot of the functions (with -p), saved to docs/images when
       that directory exists, otherwise to the current directory";

/// Practical usage examples shown with --help
pub(crate) const EXAMPLES: &str = "\
Examples:

    1. Generate nine orthogonal functions from function index 1 to 9
        $ ortho

    2. Generate eight orthogonal functions from function index 1 to 8
        $ ortho -n 8

    3. Generate nine orthogonal functions from function index 0 to 8
        $ ortho -s 0

    4. Generate nine functions orthonormal in the interval [0, 10]
        $ ortho -e 10

    5. Check orthogonality and plot the functions
        $ ortho -c -p

    6. A complete example with JSON output
        $ ortho -n 9 -s 1 -e 1 -c --format json";

/// Print text with optional color
pub(crate) fn println_colored(args: &Args, text: &str, color: Option<AnsiColors>) {
    if args.no_color {
        println!("{}", text);
    } else if let Some(c) = color {
        println!("{}", text.if_supports_color(Stream::Stdout, |t| t.color(c)));
    } else {
        println!("{}", text);
    }
}

/// Print colored error message to stderr
pub(crate) fn eprintln_colored(args: &Args, text: &str) {
    if args.no_color {
        eprintln!("{}", text);
    } else {
        eprintln!("{}", text.if_supports_color(Stream::Stderr, |t| t.red()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ortho_core::OrthoConfig;

    #[test]
    fn test_run_report() {
        let family = OrthogonalFunctions::new(OrthoConfig::default().with_num_func(2)).unwrap();
        let report = RunReport::new(&family);
        assert_eq!(report.num_func, 2);
        assert_eq!(report.end_interval, "1");
        assert_eq!(report.functions[1].alpha, "-sqrt(2/3)");
        assert_eq!(report.functions[1].coefficients, vec!["6", "-5"]);
        assert_eq!(
            report.functions[1].expression,
            "-sqrt(2/3) * (6*t^(1/2) - 5*t^(1/3))"
        );
        assert!((report.functions[1].alpha_value + (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_report_omits_unrequested_sections() {
        let family = OrthogonalFunctions::new(OrthoConfig::default().with_num_func(1)).unwrap();
        let json = serde_json::to_value(RunReport::new(&family)).unwrap();
        assert!(json.get("orthogonality").is_none());
        assert!(json.get("plot").is_none());
        assert_eq!(json["functions"][0]["coefficients"][0], "1");
    }
}
