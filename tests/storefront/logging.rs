use std::io;
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use crate::support::{api, storefront_with};

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter(Arc::clone(&self.0))
    }
}

impl io::Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "lock poisoned"))?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[tokio::test]
async fn failure_is_logged_once() {
    let sink = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_ansi(false)
        .with_max_level(Level::TRACE)
        .finish();
    // current-thread runtime: the default stays in scope across awaits
    let _guard = tracing::subscriber::set_default(subscriber);

    let api = api();
    api.set_offline(true);
    let mut shop = storefront_with(api);
    shop.load().await.unwrap_err();

    let text = sink.text();
    let lines: Vec<&str> = text
        .lines()
        .filter(|l| l.contains("Failed to fetch products data"))
        .collect();
    assert_eq!(lines.len(), 1, "log output:\n{text}");
    assert!(lines[0].contains("WARN"));
    assert!(lines[0].contains("product service unavailable"));
}
