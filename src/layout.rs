//! Ring layout generator for the circuit-diagram simulator.
//!
//! Places N pixel parts evenly on a circle and chains them DOUT → DIN.
//! The output is either the bare record lines (for pasting into the
//! `parts` / `connections` arrays of an existing `diagram.json`) or a
//! complete diagram document.
//!
//! ## Geometry
//!
//! ```text
//! step      = 360 / N
//! θ_i       = start + (i - 1)·step        ring angle, i = 1..=N
//! angle_i   = θ_i + phase                 placement angle
//! (top, left) = (A·sin angle_i, A·cos angle_i)
//! rotate    = θ_i - 180
//! ```
//!
//! `start` defaults to half a step and `phase` to -90°, which puts pixel 1
//! just right of twelve o'clock with its DIN facing the centre. Ring angles
//! are accumulated by repeated addition.

use std::fmt;
use std::io;

use log::debug;
use serde::ser::{Serialize, SerializeTuple, Serializer};

use crate::config::LayoutConfig;
use crate::error::Result;

/// Simulator route hint for a wire drawn as a straight horizontal hop.
const STRAIGHT_ROUTE: &str = "h0";

/// One pixel's position on the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// 1-based position in the chain.
    pub index: usize,
    /// Ring angle θ_i in degrees (before the phase offset).
    pub ring_angle_deg: f64,
    /// Angle the Cartesian point is projected from (θ_i + phase).
    pub angle_deg: f64,
    /// `A·sin(angle)`
    pub top: f64,
    /// `A·cos(angle)`
    pub left: f64,
}

impl Placement {
    /// Part rotation so the pixel faces along the ring.
    pub fn rotate(&self) -> f64 {
        self.ring_angle_deg - 180.0
    }

    /// Distance from the ring centre.
    pub fn radius(&self) -> f64 {
        self.top.hypot(self.left)
    }
}

/// Iterator over the N placements of a ring.
#[derive(Debug, Clone)]
pub struct Placements {
    next_index: usize,
    count: usize,
    ring_angle: f64,
    step: f64,
    phase: f64,
    amplitude: f64,
}

impl Iterator for Placements {
    type Item = Placement;

    fn next(&mut self) -> Option<Placement> {
        if self.next_index > self.count {
            return None;
        }
        let angle_deg = self.ring_angle + self.phase;
        let rad = angle_deg.to_radians();
        let placement = Placement {
            index: self.next_index,
            ring_angle_deg: self.ring_angle,
            angle_deg,
            top: self.amplitude * rad.sin(),
            left: self.amplitude * rad.cos(),
        };
        self.next_index += 1;
        self.ring_angle += self.step;
        Some(placement)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count + 1).saturating_sub(self.next_index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Placements {}

// ── Records ───────────────────────────────────────────────────

/// A pixel part record (`parts[]` entry).
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub part_type: String,
    pub id: String,
    pub top: f64,
    pub left: f64,
    pub rotate: f64,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Positions to one decimal; rotation in shortest float form (`-177.0`).
        write!(
            f,
            r#"{{ "type": "{}", "id": "{}", "top": {:.1}, "left": {:.1}, "rotate": {:?}, "attrs": {{ }} }}"#,
            self.part_type, self.id, self.top, self.left, self.rotate
        )
    }
}

impl Serialize for Part {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("Part", 6)?;
        s.serialize_field("type", &self.part_type)?;
        s.serialize_field("id", &self.id)?;
        s.serialize_field("top", &round_tenth(self.top))?;
        s.serialize_field("left", &round_tenth(self.left))?;
        s.serialize_field("rotate", &self.rotate)?;
        s.serialize_field("attrs", &serde_json::Map::new())?;
        s.end()
    }
}

/// A DOUT → DIN wire record (`connections[]` entry).
///
/// Serialises as the simulator's positional array:
/// `["rgb1:DOUT", "rgb2:DIN", "green", ["h0"]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wire {
    pub from: String,
    pub to: String,
    pub colour: String,
    pub route: Vec<String>,
}

impl fmt::Display for Wire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"[ "{}", "{}", "{}", [ "#, self.from, self.to, self.colour)?;
        for (i, hop) in self.route.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, r#""{hop}""#)?;
        }
        f.write_str(" ] ]")
    }
}

impl Serialize for Wire {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let mut t = serializer.serialize_tuple(4)?;
        t.serialize_element(&self.from)?;
        t.serialize_element(&self.to)?;
        t.serialize_element(&self.colour)?;
        t.serialize_element(&self.route)?;
        t.end()
    }
}

/// A complete simulator diagram.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Diagram {
    pub version: u32,
    pub author: String,
    pub editor: String,
    pub parts: Vec<Part>,
    pub connections: Vec<Wire>,
}

fn round_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

// ── Generator ─────────────────────────────────────────────────

/// A validated ring of `count` pixels.
#[derive(Debug, Clone)]
pub struct RingLayout {
    config: LayoutConfig,
}

impl RingLayout {
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            "layout: {} pixels, amplitude {}, phase {}°, start {}°",
            config.count,
            config.amplitude,
            config.phase_deg,
            config.first_angle_deg()
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.config.count
    }

    pub fn is_empty(&self) -> bool {
        self.config.count == 0
    }

    pub fn placements(&self) -> Placements {
        Placements {
            next_index: 1,
            count: self.config.count,
            ring_angle: self.config.first_angle_deg(),
            step: self.config.step_deg(),
            phase: self.config.phase_deg,
            amplitude: self.config.amplitude,
        }
    }

    fn part_id(&self, index: usize) -> String {
        format!("{}{}", self.config.id_prefix, index)
    }

    /// One part per pixel, in chain order.
    pub fn parts(&self) -> impl Iterator<Item = Part> + '_ {
        self.placements().map(move |p| Part {
            part_type: self.config.part_type.clone(),
            id: self.part_id(p.index),
            top: p.top,
            left: p.left,
            rotate: p.rotate(),
        })
    }

    /// N-1 wires linking each pixel's output to the next pixel's input.
    pub fn wires(&self) -> impl Iterator<Item = Wire> + '_ {
        (1..self.config.count).map(move |i| Wire {
            from: format!("{}:DOUT", self.part_id(i)),
            to: format!("{}:DIN", self.part_id(i + 1)),
            colour: self.config.wire_colour.clone(),
            route: vec![STRAIGHT_ROUTE.to_string()],
        })
    }

    /// Write every part line, then every wire line, each with a trailing
    /// comma, ready to paste into an existing diagram.
    pub fn write_lines<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for part in self.parts() {
            writeln!(out, "{part},")?;
        }
        for wire in self.wires() {
            writeln!(out, "{wire},")?;
        }
        Ok(())
    }

    pub fn diagram(&self) -> Diagram {
        Diagram {
            version: 1,
            author: self.config.author.clone(),
            editor: "wokwi".into(),
            parts: self.parts().collect(),
            connections: self.wires().collect(),
        }
    }
}
