pub(crate) mod writer;

use std::io::Write;

use crate::{Result, Value, WriteOptions};

use self::writer::Writer;

pub fn to_string_with_options(value: &Value, options: &WriteOptions) -> String {
    let mut writer = Writer::new(options);
    writer.write_value(value, 0);
    writer.finish()
}

pub fn to_vec_with_options(value: &Value, options: &WriteOptions) -> Vec<u8> {
    let mut writer = Writer::new(options);
    writer.write_value(value, 0);
    writer.finish_bytes()
}

pub fn to_writer<W: Write>(mut out: W, value: &Value, options: &WriteOptions) -> Result<()> {
    let bytes = to_vec_with_options(value, options);
    out.write_all(&bytes)?;
    out.flush()?;
    Ok(())
}
