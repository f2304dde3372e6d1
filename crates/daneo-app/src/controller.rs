use std::sync::Arc;

use daneo_config::Config;
use daneo_config::loader::LoaderConfig;
use daneo_core::{LoadReport, SessionError, SessionLoader};
use daneo_translator::TranslationClient;
use daneo_types::{LoadEvent, SessionId};
use daneo_words::{RetryingWordSource, WordSource};
use kanal::AsyncReceiver;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Wires the loader to the progress display
pub struct AppController {
    loader: SessionLoader,
    events_rx: AsyncReceiver<LoadEvent>,
    cancel_token: CancellationToken,
    printer: Mutex<Option<JoinHandle<()>>>,
}

impl AppController {
    pub fn new(config: &Config) -> Self {
        let words: Arc<dyn WordSource> = Arc::new(RetryingWordSource::from_config(&config.words));
        let translator = TranslationClient::from_config(&config.translator);

        Self::with_source(words, translator, config.loader.clone())
    }

    pub fn with_source(
        words: Arc<dyn WordSource>,
        translator: TranslationClient,
        config: LoaderConfig,
    ) -> Self {
        let (events_tx, events_rx) = kanal::bounded_async(256);
        let loader = SessionLoader::new(words, translator, config).with_events(events_tx);

        Self {
            loader,
            events_rx,
            cancel_token: CancellationToken::new(),
            printer: Mutex::new(None),
        }
    }

    /// Run one load while progress is printed. Blocks until every slot is filled.
    pub async fn load(&self, session: SessionId, count: usize) -> Result<LoadReport, SessionError> {
        let printer = tokio::spawn(progress_printer(
            self.events_rx.clone(),
            self.cancel_token.child_token(),
        ));
        *self.printer.lock().await = Some(printer);

        let outcome = self.loader.load(session, count).await;
        self.join_printer().await;

        outcome
    }

    /// Stop the progress display of an interrupted load and wait for it
    pub async fn shutdown(&self) {
        self.cancel_token.cancel();
        self.join_printer().await;
    }

    async fn join_printer(&self) {
        let printer = self.printer.lock().await.take();
        if let Some(printer) = printer {
            if let Err(e) = printer.await {
                tracing::error!("progress printer panicked: {e}");
            }
        }
    }
}

async fn progress_printer(events_rx: AsyncReceiver<LoadEvent>, cancel: CancellationToken) {
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                eprintln!("불러오기를 중단했습니다.");
                break;
            }
            event = events_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => break,
            },
        };

        let finished = matches!(event, LoadEvent::Finished { .. });
        if let Some(line) = describe(&event) {
            eprintln!("{line}");
        }
        if finished {
            break;
        }
    }
}

/// One progress line for the learner, `None` for events not worth showing
pub fn describe(event: &LoadEvent) -> Option<String> {
    match event {
        LoadEvent::Started { total, .. } => Some(format!("단어 {total}개를 불러오는 중...")),
        LoadEvent::Progress { slot, total, phase } => {
            Some(format!("[{}/{}] {}", slot + 1, total, phase))
        }
        LoadEvent::SlotResolved { .. } => None,
        LoadEvent::SlotFailed { slot, .. } => Some(format!("[{}] 단어를 불러오지 못했습니다", slot + 1)),
        LoadEvent::Finished { resolved, failed } => {
            Some(format!("완료: {resolved}개 성공, {failed}개 실패"))
        }
    }
}
