//! Blocking length-prefixed socket framing, grounded in
//! `api/src/reader.rs`/`writer.rs` but recast from async `tokio::net::TcpStream`
//! to `std::net::TcpStream` — spec.md's connection model runs one inbound
//! read loop per `Connection` on its own OS thread, not a task.
use std::io::{self, Read, Write};
use std::net::TcpStream;

pub struct Writer {
    stream: TcpStream,
}

impl Writer {
    pub fn new(stream: TcpStream) -> Self {
        Writer { stream }
    }

    /// Writes one length-prefixed, NUL-separated-field message.
    pub fn write_fields(&mut self, fields: &[String]) -> io::Result<()> {
        let mut body = fields.join("\0");
        body.push('\0');
        let len = body.len() as u32;
        self.stream.write_all(&len.to_be_bytes())?;
        self.stream.write_all(body.as_bytes())?;
        self.stream.flush()
    }
}

pub struct Reader {
    stream: TcpStream,
}

impl Reader {
    pub fn new(stream: TcpStream) -> Self {
        Reader { stream }
    }

    /// Blocks until one full length-prefixed message has been read, then
    /// splits it on NUL into its fields (the trailing empty field from the
    /// terminating NUL is dropped).
    pub fn read_fields(&mut self) -> io::Result<Vec<String>> {
        let mut len_buf = [0_u8; 4];
        self.stream.read_exact(&mut len_buf)?;
        let len = u32::from_be_bytes(len_buf) as usize;
        let mut body = vec![0_u8; len];
        self.stream.read_exact(&mut body)?;
        let text = String::from_utf8_lossy(&body);
        let mut fields: Vec<String> = text.split('\0').map(|s| s.to_string()).collect();
        if fields.last().map(|s| s.is_empty()).unwrap_or(false) {
            fields.pop();
        }
        Ok(fields)
    }
}
