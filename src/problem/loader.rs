//! Plain-text instance reader.
//!
//! Format: `n m`, then `n` profits, `m` capacities, then the `m × n` weight
//! matrix row by row. Tokens are whitespace-separated and may be spread
//! over any number of lines.

use super::err::LoadError;
use super::model::Problem;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

const PREALLOC_LIMIT: usize = 1 << 16;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProblemLoader;

impl ProblemLoader {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    pub fn from_bufread<R: BufRead>(&self, br: R) -> Result<Problem, LoadError> {
        let mut sc = Scanner::new(br);
        let n = sc.next_count()?;
        let m = sc.next_count()?;
        let cells = n
            .checked_mul(m)
            .ok_or_else(|| LoadError::BadCount(format!("{n} x {m}")))?;

        // Header counts are untrusted: buffers grow with the data actually read.
        let mut profit = Vec::with_capacity(n.min(PREALLOC_LIMIT));
        for _ in 0..n {
            profit.push(sc.next_f64()?);
        }

        let mut capacity = Vec::with_capacity(m.min(PREALLOC_LIMIT));
        for _ in 0..m {
            capacity.push(sc.next_f64()?);
        }

        let mut weights = Vec::with_capacity(cells.min(PREALLOC_LIMIT));
        for _ in 0..cells {
            weights.push(sc.next_f64()?);
        }

        let problem = Problem::new(profit, capacity, weights)?;
        tracing::debug!(n, m, "instance loaded");
        Ok(problem)
    }

    #[inline]
    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<Problem, LoadError> {
        let file = File::open(path).map_err(LoadError::Io)?;
        self.from_bufread(BufReader::new(file))
    }

    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Problem, LoadError> {
        self.from_bufread(BufReader::new(r))
    }

    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Problem, LoadError> {
        self.from_reader(s.as_bytes())
    }
}

#[derive(Debug)]
struct Scanner<R: BufRead> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    fn next_token(&mut self) -> Result<&str, LoadError> {
        loop {
            let bytes = self.buf.as_bytes();
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos < bytes.len() {
                break;
            }
            self.buf.clear();
            self.pos = 0;
            if self.rdr.read_line(&mut self.buf)? == 0 {
                return Err(LoadError::UnexpectedEof);
            }
        }
        let start = self.pos;
        let bytes = self.buf.as_bytes();
        while self.pos < bytes.len() && !bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        Ok(&self.buf[start..self.pos])
    }

    fn next_f64(&mut self) -> Result<f64, LoadError> {
        Ok(self.next_token()?.parse::<f64>()?)
    }

    fn next_count(&mut self) -> Result<usize, LoadError> {
        let tok = self.next_token()?;
        tok.parse::<usize>()
            .map_err(|_| LoadError::BadCount(tok.to_string()))
    }
}
