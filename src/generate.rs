use std::{time::{SystemTime, UNIX_EPOCH}, fs::File, io::Write};

use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use rand_distr::{Uniform, Distribution};
use tracing::info;

use crate::error::RelayError;
use crate::instance::RelayInstance;
use crate::resolution::model::{NB_LEGS, NB_SWIMMERS};

#[derive(Debug, Args)]
pub struct RelayGenerator {
    /// An optional seed to kickstart the instance generation
    #[clap(short='s', long)]
    seed: Option<u128>,
    /// Fastest generated time, in seconds
    #[clap(long, default_value="25.0")]
    min_time: f64,
    /// Slowest generated time, in seconds
    #[clap(long, default_value="45.0")]
    max_time: f64,
    /// The probability that a swimmer has a time for a given leg
    #[clap(short='d', long, default_value="0.8")]
    density: f64,
    /// Name of the file where to generate the relay instance
    #[clap(short, long)]
    output: Option<String>,
}

impl RelayGenerator {

    pub fn generate(&self) -> Result<(), RelayError> {
        self.check_settings()?;

        let mut rng = self.rng();
        let instance = self.generate_instance(&mut rng);
        let instance = serde_json::to_string_pretty(&instance)?;

        if let Some(output) = self.output.as_ref() {
            File::create(output)
                .and_then(|mut file| file.write_all(instance.as_bytes()))
                .map_err(|e| RelayError::io(output, e))?;
            info!(output = %output, "relay instance written");
        } else {
            println!("{instance}");
        }

        Ok(())
    }

    fn check_settings(&self) -> Result<(), RelayError> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(RelayError::InvalidSettings(format!(
                "density {} is not a probability",
                self.density
            )));
        }
        if !(0.0 <= self.min_time && self.min_time <= self.max_time && self.max_time < 3600.0) {
            return Err(RelayError::InvalidSettings(format!(
                "times must satisfy 0 <= min ({}) <= max ({}) < 3600",
                self.min_time, self.max_time
            )));
        }
        Ok(())
    }

    fn generate_instance(&self, rng: &mut impl Rng) -> RelayInstance {
        let names = (1..=NB_SWIMMERS).map(|i| format!("Swimmer {i}")).collect();
        let times = self.generate_times(rng);
        RelayInstance { names, times }
    }

    fn generate_times(&self, rng: &mut impl Rng) -> Vec<Vec<String>> {
        let mut times = vec![vec![String::new(); NB_LEGS]; NB_SWIMMERS];

        let rand_presence = Uniform::new_inclusive(0.0, 1.0);
        let rand_hundredths = Uniform::new_inclusive(
            (self.min_time * 100.0).round() as u32,
            (self.max_time * 100.0).round() as u32,
        );

        for row in times.iter_mut() {
            for entry in row.iter_mut() {
                if rand_presence.sample(rng) < self.density {
                    *entry = masked(rand_hundredths.sample(rng).min(359_999));
                }
            }
        }

        times
    }

    fn rng(&self) -> impl Rng {
        let init = self.seed.unwrap_or_else(|| {
            SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis()).unwrap_or_default()
        });
        let mut seed = [0_u8; 32];
        seed.iter_mut().zip(init.to_be_bytes().into_iter()).for_each(|(s, i)| *s = i);
        seed.iter_mut().rev().zip(init.to_le_bytes().into_iter()).for_each(|(s, i)| *s = i);
        ChaChaRng::from_seed(seed)
    }

}

/// Renders hundredths of a second the way the entry mask shows them: `MM:SS,CC`
fn masked(hundredths: u32) -> String {
    let minutes = hundredths / 6000;
    let seconds = hundredths / 100 % 60;
    format!("{minutes:02}:{seconds:02},{:02}", hundredths % 100)
}
