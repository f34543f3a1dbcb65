// Author: Dylan Turner <dylan.turner@tutanota.com>
//! Network shape: named hidden layer presets and the layer widths they imply

use std::{
    fmt, str::FromStr
};
use crate::error::{
    Error, Result
};

/// Hidden layer layouts that can be trained
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    FiveSigmoid,
    TwentySigmoid,
    FiveFiveSigmoid
}

impl Preset {
    pub fn hidden_layers(self) -> &'static [usize] {
        match self {
            Preset::FiveSigmoid => &[ 5 ],
            Preset::TwentySigmoid => &[ 20 ],
            Preset::FiveFiveSigmoid => &[ 5, 5 ]
        }
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "5s" => Ok(Preset::FiveSigmoid),
            "20s" => Ok(Preset::TwentySigmoid),
            "5s5s" => Ok(Preset::FiveFiveSigmoid),
            _ => Err(Error::Config(format!(
                "unknown network preset '{}', expected one of 5s, 20s, 5s5s", name
            )))
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Preset::FiveSigmoid => "5s",
            Preset::TwentySigmoid => "20s",
            Preset::FiveFiveSigmoid => "5s5s"
        })
    }
}

/// Layer widths from input to the single linear output, [ input, h1, ..., hk, 1 ]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topology {
    layers: Vec<usize>
}

impl Topology {
    pub fn new(input_len: usize, hidden: &[usize]) -> Self {
        let mut layers = Vec::with_capacity(hidden.len() + 2);
        layers.push(input_len);
        layers.extend_from_slice(hidden);
        layers.push(1);
        Self {
            layers
        }
    }

    pub fn from_preset(input_len: usize, preset: Preset) -> Self {
        Self::new(input_len, preset.hidden_layers())
    }

    pub fn layers(&self) -> &[usize] {
        &self.layers
    }

    pub fn input_len(&self) -> usize {
        self.layers[0]
    }

    // Number of weight/bias pairs, one per layer transition
    pub fn num_transitions(&self) -> usize {
        self.layers.len() - 1
    }

    /// (out, in) weight matrix shape of every transition
    pub fn shapes(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.layers.windows(2).map(|pair| (pair[1], pair[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_resolve() {
        assert_eq!("5s".parse::<Preset>().unwrap().hidden_layers(), &[ 5 ]);
        assert_eq!("20s".parse::<Preset>().unwrap().hidden_layers(), &[ 20 ]);
        assert_eq!("5s5s".parse::<Preset>().unwrap().hidden_layers(), &[ 5, 5 ]);
    }

    #[test]
    fn unknown_preset_is_config_error() {
        assert!(matches!("7s".parse::<Preset>(), Err(Error::Config(_))));
        assert!(matches!("".parse::<Preset>(), Err(Error::Config(_))));
    }

    #[test]
    fn preset_display_matches_cli_name() {
        for name in [ "5s", "20s", "5s5s" ] {
            assert_eq!(name.parse::<Preset>().unwrap().to_string(), name);
        }
    }

    #[test]
    fn shapes_follow_layers() {
        let topology = Topology::from_preset(3, Preset::FiveFiveSigmoid);
        assert_eq!(topology.layers(), &[ 3, 5, 5, 1 ]);
        assert_eq!(topology.input_len(), 3);
        assert_eq!(topology.num_transitions(), 3);
        assert_eq!(topology.shapes().collect::<Vec<_>>(), vec![ (5, 3), (5, 5), (1, 5) ]);
    }
}
