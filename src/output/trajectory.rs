//! XYZ trajectory output
//!
//! Writes one plain XYZ frame per dump: the particle count, a comment line
//! carrying step and time, then one `Ar x y z` row per particle. The format
//! has no box record, which suits an engine without periodic boundaries.

use std::{
    fs::File,
    io::{BufWriter, Result, Write},
    path::Path,
};

use crate::simulation::states::ParticleSystem;

pub struct TrajectoryWriter {
    out: BufWriter<File>,
}

impl TrajectoryWriter {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(TrajectoryWriter {
            out: BufWriter::new(file),
        })
    }

    pub fn write_frame(&mut self, system: &ParticleSystem, step: u64, time: f64) -> Result<()> {
        writeln!(self.out, "{}", system.particle_count())?;
        writeln!(self.out, "step {} time {}", step, time)?;
        for x in &system.positions {
            writeln!(self.out, "Ar {} {} {}", x.x, x.y, x.z)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()
    }
}
