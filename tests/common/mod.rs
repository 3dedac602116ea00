//! Toy datasets shared by the integration tests.
#![allow(dead_code)]
use labelboost::prelude::*;

use std::collections::BTreeSet;
use std::fmt;


/// A fruit with a color, a weight, and whether it is tasty.
pub struct Fruit {
    pub color: &'static str,
    pub weight: &'static str,
    pub tasty: bool,
}

impl Example for Fruit {
    fn label(&self) -> bool {
        self.tasty
    }
}

/// `Color=red`, `Weight=heavy`, ...
pub enum Attr {
    Color(&'static str),
    Weight(&'static str),
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attr::Color(c) => write!(f, "Color={c}"),
            Attr::Weight(w) => write!(f, "Weight={w}"),
        }
    }
}

impl Feature<Fruit> for Attr {
    fn test(&self, fruit: &Fruit) -> bool {
        match self {
            Attr::Color(c) => fruit.color == *c,
            Attr::Weight(w) => fruit.weight == *w,
        }
    }
}

pub fn fruits() -> Vec<Fruit> {
    vec![
        Fruit { color: "red", weight: "heavy", tasty: true },
        Fruit { color: "red", weight: "light", tasty: false },
        Fruit { color: "yellow", weight: "light", tasty: false },
        Fruit { color: "yellow", weight: "light", tasty: true },
    ]
}

pub fn fruit_features() -> Vec<Attr> {
    vec![Attr::Color("red"), Attr::Color("yellow"), Attr::Weight("heavy")]
}


/// A point on the real line.
pub struct Point {
    pub x: f64,
    pub label: bool,
}

impl Example for Point {
    fn label(&self) -> bool {
        self.label
    }
}

/// `x > threshold`
pub struct Above(pub f64);

impl fmt::Display for Above {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x>{}", self.0)
    }
}

impl Feature<Point> for Above {
    fn test(&self, point: &Point) -> bool {
        point.x > self.0
    }
}

pub fn points(xs: &[(f64, bool)]) -> Vec<Point> {
    xs.iter()
        .map(|&(x, label)| Point { x, label })
        .collect()
}


/// Two bits and a label.
pub struct Bits {
    pub bits: [bool; 2],
    pub label: bool,
}

impl Example for Bits {
    fn label(&self) -> bool {
        self.label
    }
}

/// `b0` or `b1`
pub struct Bit(pub usize);

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b{}", self.0)
    }
}

impl Feature<Bits> for Bit {
    fn test(&self, example: &Bits) -> bool {
        example.bits[self.0]
    }
}

/// `label = b0 XOR b1`, in the order `11, 10, 01, 00`.
pub fn xor() -> Vec<Bits> {
    [[true, true], [true, false], [false, true], [false, false]]
        .into_iter()
        .map(|bits| Bits { bits, label: bits[0] != bits[1] })
        .collect()
}


/// A document with a bag of words and a set of tags.
pub struct Doc {
    pub words: BTreeSet<&'static str>,
    pub tags: BTreeSet<&'static str>,
}

impl MultiLabelExample for Doc {
    type Label = &'static str;

    fn has_label(&self, label: &Self::Label) -> bool {
        self.tags.contains(label)
    }

    fn labels(&self) -> BTreeSet<Self::Label> {
        self.tags.clone()
    }
}

/// Holds when the document contains the word.
pub struct Word(pub &'static str);

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Feature<Doc> for Word {
    fn test(&self, doc: &Doc) -> bool {
        doc.words.contains(self.0)
    }
}

pub fn doc(words: &[&'static str], tags: &[&'static str]) -> Doc {
    Doc {
        words: words.iter().copied().collect(),
        tags: tags.iter().copied().collect(),
    }
}

pub fn docs() -> Vec<Doc> {
    vec![
        doc(&["ball"], &["sports"]),
        doc(&["goal"], &["sports"]),
        doc(&["vote"], &["politics"]),
        doc(&["ball", "vote"], &["sports", "politics"]),
    ]
}

pub fn words() -> Vec<Word> {
    vec![Word("ball"), Word("vote"), Word("goal")]
}
