//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! This module provides `kani::Arbitrary` trait implementations for
//! the crate's variable types, enabling property-based verification
//! with the Kani model checker.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{Token, Variable, VariableType};

/// Valid characters for the first position of a name
const NAME_START_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Valid characters after the first position of a name
const NAME_CHARS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789._-";

/// Unreserved characters allowed verbatim in a default
const UNRESERVED_CHARS: &[u8] = b"abcxyzABCXYZ0189-._~";

fn pick(chars: &[u8]) -> char {
    let idx: usize = kani::any();
    let idx = idx % chars.len();
    chars[idx] as char
}

/// Generate a valid name of 1-4 chars for tractability
fn arbitrary_name() -> String {
    let len: usize = kani::any();
    let len = 1 + (len % 4);

    (0..len)
        .map(|i| if i == 0 { pick(NAME_START_CHARS) } else { pick(NAME_CHARS) })
        .collect()
}

impl kani::Arbitrary for VariableType {
    fn any() -> Self {
        VariableType::new(&arbitrary_name()).expect("valid type name by construction")
    }
}

impl kani::Arbitrary for Variable {
    fn any() -> Self {
        let name = arbitrary_name();

        let has_default: bool = kani::any();
        if !has_default {
            return Variable::new(&name).expect("valid name by construction");
        }

        // 0-3 atoms, each an unreserved char or a fixed triple
        let len: usize = kani::any();
        let len = len % 4;
        let mut default = String::new();
        for _ in 0..len {
            let encoded: bool = kani::any();
            if encoded {
                default.push_str("%2F");
            } else {
                default.push(pick(UNRESERVED_CHARS));
            }
        }

        Variable::with_default(&name, &default).expect("valid default by construction")
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: Display then parse yields the same variable
#[kani::proof]
#[kani::unwind(14)]
fn proof_variable_display_roundtrip() {
    let var: Variable = kani::any();
    let reparsed = Variable::parse(&var.to_string()).expect("display should parse");
    assert_eq!(reparsed, var);
}

/// Proof: A variable token always prints as a braced expression
#[kani::proof]
#[kani::unwind(14)]
fn proof_token_display_is_braced() {
    let var: Variable = kani::any();
    let token = Token::Variable(var);
    let s = token.to_string();
    assert!(s.starts_with('{'));
    assert!(s.ends_with('}'));
}

/// Proof: Type names and variable names share one grammar
#[kani::proof]
#[kani::unwind(6)]
fn proof_type_and_variable_names_agree() {
    let t: VariableType = kani::any();
    assert!(Variable::is_valid_name(t.name()));
    assert!(VariableType::is_valid_name(t.name()));
}
