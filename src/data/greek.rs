//! Greek letter mappings
//!
//! Forward names follow LaTeX usage, where `\epsilon` and `\phi` are the
//! lunate/stroked forms and `\varepsilon`/`\varphi` the open/loopy ones.
//! Capitals without a standard command use the unicode-math names.

use super::tables::MappingEntry;

pub static GREEK_LETTERS: &[MappingEntry] = &[
    // Lowercase
    MappingEntry::both('α', "\\alpha"),
    MappingEntry::both('β', "\\beta"),
    MappingEntry::both('γ', "\\gamma"),
    MappingEntry::both('δ', "\\delta"),
    MappingEntry::both('ε', "\\varepsilon"),
    MappingEntry::both('ζ', "\\zeta"),
    MappingEntry::both('η', "\\eta"),
    MappingEntry::both('θ', "\\theta"),
    MappingEntry::both('ι', "\\iota"),
    MappingEntry::both('κ', "\\kappa"),
    MappingEntry::both('λ', "\\lambda"),
    MappingEntry::both('μ', "\\mu"),
    MappingEntry::both('ν', "\\nu"),
    MappingEntry::both('ξ', "\\xi"),
    MappingEntry::both('ο', "\\omicron"),
    MappingEntry::both('π', "\\pi"),
    MappingEntry::both('ρ', "\\rho"),
    MappingEntry::both('ς', "\\varsigma"),
    MappingEntry::both('σ', "\\sigma"),
    MappingEntry::both('τ', "\\tau"),
    MappingEntry::both('υ', "\\upsilon"),
    MappingEntry::both('φ', "\\varphi"),
    MappingEntry::both('χ', "\\chi"),
    MappingEntry::both('ψ', "\\psi"),
    MappingEntry::both('ω', "\\omega"),
    // Variants
    MappingEntry::both('ϵ', "\\epsilon"),
    MappingEntry::both('ϑ', "\\vartheta"),
    MappingEntry::both('ϰ', "\\varkappa"),
    MappingEntry::both('ϕ', "\\phi"),
    MappingEntry::both('ϱ', "\\varrho"),
    MappingEntry::both('ϖ', "\\varpi"),
    MappingEntry::both('ϝ', "\\digamma"),
    MappingEntry::both('Ϝ', "\\Digamma"),
    MappingEntry::both('ϴ', "\\varTheta"),
    // Uppercase
    MappingEntry::both('Α', "\\Alpha"),
    MappingEntry::both('Β', "\\Beta"),
    MappingEntry::both('Γ', "\\Gamma"),
    MappingEntry::both('Δ', "\\Delta"),
    MappingEntry::both('Ε', "\\Epsilon"),
    MappingEntry::both('Ζ', "\\Zeta"),
    MappingEntry::both('Η', "\\Eta"),
    MappingEntry::both('Θ', "\\Theta"),
    MappingEntry::both('Ι', "\\Iota"),
    MappingEntry::both('Κ', "\\Kappa"),
    MappingEntry::both('Λ', "\\Lambda"),
    MappingEntry::both('Μ', "\\Mu"),
    MappingEntry::both('Ν', "\\Nu"),
    MappingEntry::both('Ξ', "\\Xi"),
    MappingEntry::both('Ο', "\\Omicron"),
    MappingEntry::both('Π', "\\Pi"),
    MappingEntry::both('Ρ', "\\Rho"),
    MappingEntry::both('Σ', "\\Sigma"),
    MappingEntry::both('Τ', "\\Tau"),
    MappingEntry::both('Υ', "\\Upsilon"),
    MappingEntry::both('Φ', "\\Phi"),
    MappingEntry::both('Χ', "\\Chi"),
    MappingEntry::both('Ψ', "\\Psi"),
    MappingEntry::both('Ω', "\\Omega"),
    // Compatibility code points sharing a command with the letters above
    MappingEntry::forward_only('\u{00B5}', "\\mu"),
    MappingEntry::forward_only('\u{2126}', "\\Omega"),
    MappingEntry::forward_only('\u{2206}', "\\Delta"),
    MappingEntry::reverse_only('λ', "\\lamda"),
    MappingEntry::reverse_only('Λ', "\\Lamda"),
];
