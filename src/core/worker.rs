//! Worker threads for the fm core operations.
//!
//! Handles directory reads and file operations on background threads so the
//! event loop never blocks on the filesystem. Requests [WorkerTask] come in from
//! the AppState via channels, and results or errors [WorkerResponse] go back the
//! same way; `AppState::tick` drains them like any other input event.
//!
//! # Caution:
//! This module is a central protocol boundary. Adding or editing variants may
//! require corresponding changes in the response handling of the app state.

use crate::core::{DirectoryProvider, FileEntry, Formatter, LocalFs};
use crate::error::{FmError, FmResult};
use crate::utils::{copy_recursive, get_unused_path, is_plain_name};

use crossbeam_channel::{Receiver, Sender, unbounded};
use tracing::{debug, info, warn};

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

/// Listing preferences sent along with every directory load.
#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    pub dirs_first: bool,
    pub show_hidden: bool,
    pub case_insensitive: bool,
}

/// Tasks sent to the worker threads via channel.
pub enum WorkerTask {
    LoadDirectory {
        path: PathBuf,
        focus: Option<OsString>,
        options: ListOptions,
        request_id: u64,
    },
    FileOp {
        op: FileOperation,
        cancel: Arc<AtomicBool>,
        request_id: u64,
    },
}

/// Supported file system operations the worker can perform.
#[derive(Debug, Clone, PartialEq)]
pub enum FileOperation {
    /// Move `src` into the directory `dest_dir`, keeping its name.
    Move { src: PathBuf, dest_dir: PathBuf },
    Delete { path: PathBuf, to_trash: bool },
    /// Rename `old` within its directory. `new_name` must be a plain name.
    Rename { old: PathBuf, new_name: String },
    Create { path: PathBuf, is_dir: bool },
}

/// Responses sent from the worker threads back to the main thread.
#[derive(Debug)]
pub enum WorkerResponse {
    DirectoryLoaded {
        path: PathBuf,
        entries: Vec<FileEntry>,
        focus: Option<OsString>,
        request_id: u64,
    },
    OperationComplete {
        message: String,
        request_id: u64,
        focus: Option<OsString>,
    },
    /// A directory load failed.
    Error {
        message: String,
        request_id: u64,
    },
    /// A file operation failed. `request_id` is the operation id.
    OperationFailed {
        message: String,
        request_id: u64,
    },
}

/// The file-operations collaborator.
///
/// Callers only trigger operations; success or failure comes back later through
/// the worker response channel, never through these calls.
pub trait FileOperations {
    fn move_item(&self, item: &Path, destination: &Path);
    fn delete(&self, item: &Path, to_trash: bool);
    fn create(&self, path: &Path, is_dir: bool);
    fn rename(&self, item: &Path, new_name: &str);
}

/// Owns the worker thread channels.
///
/// Directory loads and file operations each have a dedicated thread, so a slow
/// copy never delays a listing refresh.
pub struct Workers {
    io_tx: Sender<WorkerTask>,
    fileop_tx: Sender<WorkerTask>,
    response_rx: Receiver<WorkerResponse>,
    next_op_id: Cell<u64>,
    pending: RefCell<HashMap<u64, Arc<AtomicBool>>>,
}

impl Workers {
    /// Create the worker set backed by the local filesystem.
    pub fn spawn() -> Self {
        Self::spawn_with_provider(Arc::new(LocalFs))
    }

    /// Create the worker set with a custom directory provider.
    pub fn spawn_with_provider(provider: Arc<dyn DirectoryProvider>) -> Self {
        let (io_tx, io_rx) = unbounded::<WorkerTask>();
        let (fileop_tx, fileop_rx) = unbounded::<WorkerTask>();
        let (res_tx, response_rx) = unbounded::<WorkerResponse>();

        start_io_worker(provider, io_rx, res_tx.clone());
        start_fileop_worker(fileop_rx, res_tx);

        Self {
            io_tx,
            fileop_tx,
            response_rx,
            next_op_id: Cell::new(0),
            pending: RefCell::new(HashMap::new()),
        }
    }

    /// Accessor for the I/O worker task sender.
    pub fn io_tx(&self) -> &Sender<WorkerTask> {
        &self.io_tx
    }

    /// Accessor for the file operation worker task sender.
    pub fn fileop_tx(&self) -> &Sender<WorkerTask> {
        &self.fileop_tx
    }

    /// Accessor for the worker response receiver.
    pub fn response_rx(&self) -> &Receiver<WorkerResponse> {
        &self.response_rx
    }

    /// Number of file operations sent but not yet reported back.
    pub fn pending_ops(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Marks an operation as finished once its response has been received.
    pub fn complete_op(&self, request_id: u64) {
        self.pending.borrow_mut().remove(&request_id);
    }

    /// Cancels every queued file operation that has not started yet.
    pub fn cancel_pending(&self) {
        for (id, token) in self.pending.borrow_mut().drain() {
            debug!(request_id = id, "cancelling pending file operation");
            token.store(true, Ordering::Release);
        }
    }

    fn dispatch(&self, op: FileOperation) {
        let request_id = self.next_op_id.get().wrapping_add(1);
        self.next_op_id.set(request_id);

        let cancel = Arc::new(AtomicBool::new(false));
        self.pending
            .borrow_mut()
            .insert(request_id, Arc::clone(&cancel));

        debug!(request_id, ?op, "dispatching file operation");
        if self
            .fileop_tx
            .send(WorkerTask::FileOp {
                op,
                cancel,
                request_id,
            })
            .is_err()
        {
            warn!(request_id, "file operation worker is gone");
            self.complete_op(request_id);
        }
    }
}

impl FileOperations for Workers {
    fn move_item(&self, item: &Path, destination: &Path) {
        self.dispatch(FileOperation::Move {
            src: item.to_path_buf(),
            dest_dir: destination.to_path_buf(),
        });
    }

    fn delete(&self, item: &Path, to_trash: bool) {
        self.dispatch(FileOperation::Delete {
            path: item.to_path_buf(),
            to_trash,
        });
    }

    fn create(&self, path: &Path, is_dir: bool) {
        self.dispatch(FileOperation::Create {
            path: path.to_path_buf(),
            is_dir,
        });
    }

    fn rename(&self, item: &Path, new_name: &str) {
        self.dispatch(FileOperation::Rename {
            old: item.to_path_buf(),
            new_name: new_name.to_string(),
        });
    }
}

/// Starts the io worker thread, which listens to [WorkerTask] and sends back [WorkerResponse]
///
/// # Arguments
/// * `provider` - Source of the raw listings
/// * `task_rx` - Receiver channel for incoming tasks
/// * `res_tx` - Sender channel for outgoing responses
fn start_io_worker(
    provider: Arc<dyn DirectoryProvider>,
    task_rx: Receiver<WorkerTask>,
    res_tx: Sender<WorkerResponse>,
) {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let WorkerTask::LoadDirectory {
                path,
                focus,
                options,
                request_id,
            } = task
            else {
                continue;
            };

            match provider.list(&path) {
                Ok(mut entries) => {
                    Formatter::new(
                        options.dirs_first,
                        options.show_hidden,
                        options.case_insensitive,
                    )
                    .filter_entries(&mut entries);
                    debug!(path = %path.display(), count = entries.len(), request_id, "directory loaded");
                    let _ = res_tx.send(WorkerResponse::DirectoryLoaded {
                        path,
                        entries,
                        focus,
                        request_id,
                    });
                }
                Err(e) => {
                    warn!(request_id, error = %e, "directory load failed");
                    let _ = res_tx.send(WorkerResponse::Error {
                        message: e.to_string(),
                        request_id,
                    });
                }
            }
        }
    });
}

/// Starts the file operation worker thread
///
/// # Arguments
/// * `task_rx` - Receiver channel for incoming tasks
/// * `res_tx` - Sender channel for outgoing responses
fn start_fileop_worker(task_rx: Receiver<WorkerTask>, res_tx: Sender<WorkerResponse>) {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let WorkerTask::FileOp {
                op,
                cancel,
                request_id,
            } = task
            else {
                continue;
            };

            if cancel.load(Ordering::Acquire) {
                debug!(request_id, "skipping cancelled file operation");
                continue;
            }

            let response = match run_file_operation(op) {
                Ok((message, focus)) => {
                    info!(request_id, %message, "file operation complete");
                    WorkerResponse::OperationComplete {
                        message,
                        request_id,
                        focus,
                    }
                }
                Err(e) => {
                    warn!(request_id, error = %e, "file operation failed");
                    WorkerResponse::OperationFailed {
                        message: e.to_string(),
                        request_id,
                    }
                }
            };
            let _ = res_tx.send(response);
        }
    });
}

/// Performs one operation, returning a status message and the name to focus afterwards.
fn run_file_operation(op: FileOperation) -> FmResult<(String, Option<OsString>)> {
    match op {
        FileOperation::Move { src, dest_dir } => move_into(&src, &dest_dir),
        FileOperation::Delete { path, to_trash } => {
            let name = display_name(&path);
            if to_trash {
                trash::delete(&path)?;
                Ok((format!("Moved {} to trash", name), None))
            } else {
                let res = if path.is_dir() {
                    fs::remove_dir_all(&path)
                } else {
                    fs::remove_file(&path)
                };
                res.map_err(|e| FmError::io(&path, e))?;
                Ok((format!("Deleted {}", name), None))
            }
        }
        FileOperation::Rename { old, new_name } => {
            if !is_plain_name(&new_name) {
                return Err(FmError::InvalidName(new_name));
            }
            let new = old.with_file_name(&new_name);
            if new.exists() {
                return Err(FmError::AlreadyExists(new));
            }
            fs::rename(&old, &new).map_err(|e| FmError::io(&old, e))?;
            Ok((
                format!("Renamed to {}", display_name(&new)),
                new.file_name().map(|n| n.to_os_string()),
            ))
        }
        FileOperation::Create { path, is_dir } => {
            let target = get_unused_path(&path);
            let res = if is_dir {
                fs::create_dir_all(&target)
            } else {
                fs::OpenOptions::new()
                    .write(true)
                    .create_new(true)
                    .open(&target)
                    .map(|_| ())
            };
            res.map_err(|e| FmError::io(&target, e))?;
            Ok((
                format!("Created {}", display_name(&target)),
                target.file_name().map(|n| n.to_os_string()),
            ))
        }
    }
}

/// Moves `src` into `dest_dir`.
///
/// Falls back to copy-and-remove when a plain rename fails (e.g. across devices).
fn move_into(src: &Path, dest_dir: &Path) -> FmResult<(String, Option<OsString>)> {
    let Some(name) = src.file_name() else {
        return Err(FmError::io(
            src,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "cannot move this path"),
        ));
    };

    if src.parent() == Some(dest_dir) {
        return Ok((
            format!("{} is already here", name.to_string_lossy()),
            Some(name.to_os_string()),
        ));
    }
    if src.is_dir() && dest_dir.starts_with(src) {
        return Err(FmError::io(
            dest_dir,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "cannot move a directory into itself",
            ),
        ));
    }

    let target = get_unused_path(&dest_dir.join(name));
    if let Err(rename_err) = fs::rename(src, &target) {
        debug!(error = %rename_err, "rename failed, copying instead");
        copy_recursive(src, &target).map_err(|e| FmError::io(src, e))?;
        let removed = if src.is_dir() {
            fs::remove_dir_all(src)
        } else {
            fs::remove_file(src)
        };
        removed.map_err(|e| FmError::io(src, e))?;
    }

    Ok((
        format!("Moved {} to {}", name.to_string_lossy(), dest_dir.display()),
        target.file_name().map(|n| n.to_os_string()),
    ))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
