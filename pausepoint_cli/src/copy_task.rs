use std::path::Path;

use thiserror::Error;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufWriter};

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("disk error: {0}")]
    Disk(#[from] std::io::Error),
    #[error("aborted at {percent}% (callback replied {code})")]
    Aborted { percent: i32, code: i32 },
}

/// Copies `input` to `output` in chunks, asking `pause_check` whether to
/// keep going.
///
/// The check is called once per integer percent transition with the current
/// percentage. A zero reply means continue; any non-zero reply stops the
/// copy immediately and surfaces as [`CopyError::Aborted`], with whatever
/// was written so far flushed to disk. What the non-zero code means is
/// decided here, by the caller; the registry that usually backs
/// `pause_check` just passes it through.
///
/// Uses async I/O (tokio::fs) with a 256 KB write buffer to avoid blocking
/// the tokio runtime.
pub async fn copy_with_pause_checks(
    input: &Path,
    output: &Path,
    chunk_size: usize,
    mut pause_check: impl FnMut(i32) -> i32,
) -> Result<u64, CopyError> {
    let total = tokio::fs::metadata(input).await?.len();
    log::debug!(
        "copying {} -> {} ({} bytes, {} byte chunks)",
        input.display(),
        output.display(),
        total,
        chunk_size
    );

    let mut reader = File::open(input).await?;
    let file = File::create(output).await?;
    let mut writer = BufWriter::with_capacity(256 * 1024, file);

    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut copied: u64 = 0;
    let mut last_reported: i32 = -1;

    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        writer.write_all(&buf[..n]).await?;
        copied += n as u64;

        // Report each integer percent exactly once. total can be 0 if the
        // file grew after the metadata call; treat that as already done.
        let percent = if total > 0 {
            (copied * 100 / total) as i32
        } else {
            100
        };
        if percent != last_reported {
            last_reported = percent;
            let code = pause_check(percent);
            if code != 0 {
                let _ = writer.flush().await;
                log::info!("copy stopped at {}% (code {})", percent, code);
                return Err(CopyError::Aborted { percent, code });
            }
        }
    }

    writer.flush().await?;
    log::debug!("copy finished: {} bytes", copied);
    Ok(copied)
}
