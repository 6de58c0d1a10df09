use crate::domain::account::AccountView;
use crate::error::Result;
use std::io::Write;

/// Writes the final account snapshot, sorted by account id.
pub struct AccountWriter<W: Write> {
    writer: W,
}

impl<W: Write> AccountWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_csv(&mut self, mut accounts: Vec<AccountView>) -> Result<()> {
        accounts.sort_by(|a, b| a.account_id.cmp(&b.account_id));
        let mut wtr = csv::Writer::from_writer(&mut self.writer);
        for view in accounts {
            wtr.serialize(view)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn write_json(&mut self, mut accounts: Vec<AccountView>) -> Result<()> {
        accounts.sort_by(|a, b| a.account_id.cmp(&b.account_id));
        serde_json::to_writer_pretty(&mut self.writer, &accounts)?;
        writeln!(self.writer)?;
        Ok(())
    }
}
