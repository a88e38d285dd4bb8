//! Day 1: a circular dial with positions 0-99, starting at 50. Each command
//! rotates it left or right some number of clicks; we count how many commands
//! leave it sitting exactly on 0.

use failure::Error;
use std::str::FromStr;

const DIAL_SIZE: i64 = 100;
const START_POSITION: i64 = 50;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Left,
    Right,
}

/// A single rotation command, like `L68` or `R14`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rotation {
    pub direction: Direction,
    pub amount: u32,
}

impl FromStr for Rotation {
    type Err = Error;
    fn from_str(s: &str) -> Result<Rotation, Error> {
        if s.is_empty() {
            return Err(format_err!("empty rotation"));
        }
        // Only `L` is checked; any other leading character rotates right.
        let direction = if s.starts_with('L') {
            Direction::Left
        } else {
            Direction::Right
        };
        let amount = u32::from_str(&s[1..])?;
        Ok(Rotation { direction, amount })
    }
}

/// The dial itself: one position on the ring.
#[derive(Debug)]
pub struct Dial {
    position: i64,
}

impl Dial {
    pub fn new() -> Dial {
        Dial {
            position: START_POSITION,
        }
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    /// Apply `rotation` and return the new position. `rem_euclid` keeps the
    /// position in [0, 100) even when a left turn takes it below zero.
    pub fn turn(&mut self, rotation: Rotation) -> i64 {
        let delta = match rotation.direction {
            Direction::Left => -(rotation.amount as i64),
            Direction::Right => rotation.amount as i64,
        };
        self.position = (self.position + delta).rem_euclid(DIAL_SIZE);
        self.position
    }
}

/// Parse one rotation per line, skipping lines that are blank after trimming.
pub fn parse_rotations(input: &str) -> Result<Vec<Rotation>, Error> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Rotation::from_str)
        .collect()
}

/// Part 1: how many rotations leave the dial exactly on 0.
pub fn part1(input: &str) -> Result<usize, Error> {
    let mut dial = Dial::new();
    let mut zero_count = 0;
    for rotation in parse_rotations(input)? {
        if dial.turn(rotation) == 0 {
            zero_count += 1;
        }
    }
    Ok(zero_count)
}
