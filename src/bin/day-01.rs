extern crate advent_of_code_2025 as aoc;
extern crate failure;

use failure::Error;

fn main() -> Result<(), Error> {
    let input = aoc::read_input("input.txt")?;
    println!("Part 1: {}", aoc::dial::part1(&input)?);
    Ok(())
}
