use crate::core::error::SimError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Catalog of component kinds
///
/// Each kind fixes its port arities and its evaluation rule. Ports are
/// addressed positionally, so a kind with two inputs exposes input
/// slots 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Kind {
    And,
    Or,
    Xor,
    Nand,
    Not,
    Switch,
    Button,
    Bulb,
}

impl Kind {
    /// Every kind in catalog order
    pub const ALL: [Kind; 8] = [
        Kind::And,
        Kind::Or,
        Kind::Xor,
        Kind::Nand,
        Kind::Not,
        Kind::Switch,
        Kind::Button,
        Kind::Bulb,
    ];

    /// Number of input slots
    pub fn input_arity(&self) -> usize {
        match self {
            Kind::And | Kind::Or | Kind::Xor | Kind::Nand => 2,
            Kind::Not | Kind::Bulb => 1,
            Kind::Switch | Kind::Button => 0,
        }
    }

    /// Number of output slots
    pub fn output_arity(&self) -> usize {
        match self {
            Kind::Bulb => 0,
            _ => 1,
        }
    }

    /// Sources carry a toggle state set from outside the engine
    pub fn is_source(&self) -> bool {
        matches!(self, Kind::Switch | Kind::Button)
    }

    pub fn is_sink(&self) -> bool {
        self.output_arity() == 0
    }

    /// Compute the output for the given input vector.
    ///
    /// Returns `None` for kinds without an output. Slots missing from
    /// `inputs` read low; sources read only `toggle`.
    pub fn evaluate(&self, inputs: &[bool], toggle: bool) -> Option<bool> {
        let slot = |i: usize| inputs.get(i).copied().unwrap_or(false);
        match self {
            Kind::And => Some(slot(0) && slot(1)),
            Kind::Or => Some(slot(0) || slot(1)),
            Kind::Xor => Some(slot(0) != slot(1)),
            Kind::Nand => Some(!(slot(0) && slot(1))),
            Kind::Not => Some(!slot(0)),
            Kind::Switch | Kind::Button => Some(toggle),
            Kind::Bulb => None,
        }
    }

    /// Upper-case catalog name
    pub fn name(&self) -> &'static str {
        match self {
            Kind::And => "AND",
            Kind::Or => "OR",
            Kind::Xor => "XOR",
            Kind::Nand => "NAND",
            Kind::Not => "NOT",
            Kind::Switch => "SWITCH",
            Kind::Button => "BUTTON",
            Kind::Bulb => "BULB",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        if upper == "OUTPUT" {
            return Ok(Kind::Bulb);
        }
        Kind::ALL
            .iter()
            .find(|kind| kind.name() == upper)
            .copied()
            .ok_or_else(|| SimError::InvalidKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIRS: [(bool, bool); 4] = [(false, false), (false, true), (true, false), (true, true)];

    #[test]
    fn test_two_input_truth_tables() {
        for (a, b) in PAIRS {
            assert_eq!(Kind::And.evaluate(&[a, b], false), Some(a && b));
            assert_eq!(Kind::Or.evaluate(&[a, b], false), Some(a || b));
            assert_eq!(Kind::Xor.evaluate(&[a, b], false), Some(a ^ b));
            assert_eq!(Kind::Nand.evaluate(&[a, b], false), Some(!(a && b)));
        }
        assert_eq!(Kind::Nand.evaluate(&[true, false], false), Some(true));
        assert_eq!(Kind::Xor.evaluate(&[true, true], false), Some(false));
    }

    #[test]
    fn test_not_and_sources() {
        assert_eq!(Kind::Not.evaluate(&[false], false), Some(true));
        assert_eq!(Kind::Not.evaluate(&[true], false), Some(false));

        for kind in [Kind::Switch, Kind::Button] {
            assert_eq!(kind.evaluate(&[], true), Some(true));
            assert_eq!(kind.evaluate(&[], false), Some(false));
        }
    }

    #[test]
    fn test_short_input_vector_reads_low() {
        assert_eq!(Kind::And.evaluate(&[true], false), Some(false));
        assert_eq!(Kind::Or.evaluate(&[true], false), Some(true));
        assert_eq!(Kind::Xor.evaluate(&[true], false), Some(true));
        assert_eq!(Kind::Nand.evaluate(&[], false), Some(true));
        assert_eq!(Kind::Not.evaluate(&[], false), Some(true));
        assert_eq!(Kind::Bulb.evaluate(&[], false), None);
    }

    #[test]
    fn test_bulb_has_no_output() {
        assert_eq!(Kind::Bulb.evaluate(&[true], false), None);
        assert!(Kind::Bulb.is_sink());
    }

    #[test]
    fn test_arities() {
        assert_eq!((Kind::Bulb.input_arity(), Kind::Bulb.output_arity()), (1, 0));
        assert_eq!((Kind::Switch.input_arity(), Kind::Switch.output_arity()), (0, 1));
        assert_eq!((Kind::Button.input_arity(), Kind::Button.output_arity()), (0, 1));
        assert_eq!((Kind::Not.input_arity(), Kind::Not.output_arity()), (1, 1));
        for kind in [Kind::And, Kind::Or, Kind::Xor, Kind::Nand] {
            assert_eq!((kind.input_arity(), kind.output_arity()), (2, 1));
        }
    }

    #[test]
    fn test_parse_kind_names() {
        assert_eq!("and".parse::<Kind>(), Ok(Kind::And));
        assert_eq!("NAND".parse::<Kind>(), Ok(Kind::Nand));
        assert_eq!(" Bulb ".parse::<Kind>(), Ok(Kind::Bulb));
        assert_eq!("output".parse::<Kind>(), Ok(Kind::Bulb));
        for kind in Kind::ALL {
            assert_eq!(kind.to_string().parse::<Kind>(), Ok(kind));
        }
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = "FLIPFLOP".parse::<Kind>().unwrap_err();
        assert_eq!(err, SimError::InvalidKind("FLIPFLOP".to_string()));
    }
}
