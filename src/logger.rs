use std::{
    fs::File,
    io,
    sync::mpsc::{channel, Receiver, Sender},
    thread::{self, JoinHandle},
};

use std::io::Write as _;

use chrono::Local;
use log::{LevelFilter, Log, Record};

use crate::Args;

/// Writes log lines to stdout, and to a file when `--save-logs` is given,
/// from a dedicated writer thread.
pub struct Logger {
    level: LevelFilter,
    join_handle: Option<JoinHandle<()>>,
    message_sender: Option<Sender<Option<String>>>,
}

impl Logger {
    pub fn new(args: &Args) -> Result<Logger, io::Error> {
        let file = args.save_logs.as_ref().map(File::create).transpose()?;
        let (message_sender, message_receiver) = channel();
        let join_handle = thread::spawn(move || Logger::writer_thread(file, message_receiver));
        Ok(Logger {
            level: args.log_level,
            join_handle: Some(join_handle),
            message_sender: Some(message_sender),
        })
    }

    fn writer_thread(mut file: Option<File>, message_receiver: Receiver<Option<String>>) {
        for message in message_receiver {
            match (message, &mut file) {
                (None, Some(file)) => {
                    let _ = file.flush();
                }
                (Some(message), file) => {
                    println!("{message}");
                    if let Some(file) = file {
                        let _ = writeln!(file, "{message}");
                    }
                }
                _ => {}
            }
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        let timestamp = Local::now().format("%H:%M:%S%.3f");
        let log_str = format!("[{}|{}] {}", record.level(), timestamp, record.args());
        let _ = self.message_sender.as_ref().unwrap().send(Some(log_str));
    }

    fn flush(&self) {
        let _ = self.message_sender.as_ref().unwrap().send(None);
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        drop(self.message_sender.take());
        let _ = self.join_handle.take().map(JoinHandle::join);
    }
}
