//! Appointment list for the signed-in customer.
//!
//! [`AppointmentsResource`] loads a customer's appointments when it is
//! mounted and whenever the signed-in user changes, and can be refetched on
//! demand. Failures never escape: they become an empty list plus a fixed
//! message in [`AppointmentsState`].
//!
//! Every load takes a generation number. A response that arrives after a
//! newer load has started is dropped, so rapid user switches cannot leave
//! another user's appointments on screen.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{watch, RwLock};
use tracing::{debug, error, info};

use crate::client::AppointmentSource;
use crate::messages::redact;
use crate::types::{Appointment, User};

/// Message shown when appointments could not be loaded.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch appointments. The backend might be offline.";

/// Observable state of the appointment list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentsState {
    pub appointments: Vec<Appointment>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Appointment list bound to the signed-in user.
pub struct AppointmentsResource<S> {
    source: S,
    user_id: RwLock<Option<String>>,
    generation: AtomicU64,
    state: watch::Sender<AppointmentsState>,
}

impl<S: AppointmentSource> AppointmentsResource<S> {
    /// Create an unmounted resource. Nothing is fetched until [`mount`](Self::mount).
    pub fn new(source: S) -> Self {
        let (state, _) = watch::channel(AppointmentsState::default());
        Self {
            source,
            user_id: RwLock::new(None),
            generation: AtomicU64::new(0),
            state,
        }
    }

    /// Bind to `user` and load its appointments.
    pub async fn mount(&self, user: Option<&User>) {
        let user_id = user.map(|u| u.id.clone());
        let (generation, user_changed) = {
            let mut current = self.user_id.write().await;
            let user_changed = *current != user_id;
            *current = user_id.clone();
            (self.next_generation(), user_changed)
        };
        self.load(user_id, generation, user_changed).await;
    }

    /// Rebind to `user`, loading only when the user id changed.
    ///
    /// Returns whether a load was performed.
    pub async fn set_user(&self, user: Option<&User>) -> bool {
        let user_id = user.map(|u| u.id.clone());
        let generation = {
            let mut current = self.user_id.write().await;
            if *current == user_id {
                return false;
            }
            *current = user_id.clone();
            self.next_generation()
        };
        self.load(user_id, generation, true).await;
        true
    }

    /// Load again for the current user. The shown list stays until the
    /// response arrives.
    pub async fn refetch(&self) {
        let (user_id, generation) = {
            let current = self.user_id.read().await;
            (current.clone(), self.next_generation())
        };
        self.load(user_id, generation, false).await;
    }

    /// Id of the user the resource is bound to.
    pub async fn user_id(&self) -> Option<String> {
        self.user_id.read().await.clone()
    }

    /// Current state.
    pub fn snapshot(&self) -> AppointmentsState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<AppointmentsState> {
        self.state.subscribe()
    }

    /// Generations are taken while the `user_id` lock is held, so their
    /// order matches the order of user changes.
    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn load(&self, user_id: Option<String>, generation: u64, user_changed: bool) {
        let Some(user_id) = user_id else {
            debug!("No signed-in user, skipping appointment fetch");
            self.state.send_if_modified(|state| {
                if !self.is_current(generation) {
                    return false;
                }
                *state = AppointmentsState::default();
                true
            });
            return;
        };

        self.state.send_if_modified(|state| {
            if !self.is_current(generation) {
                return false;
            }
            if user_changed {
                state.appointments.clear();
            }
            state.is_loading = true;
            state.error = None;
            true
        });

        let result = self.source.fetch_appointments(&user_id).await;

        let next = match result {
            Ok(appointments) => {
                info!(user_id = %user_id, count = appointments.len(), "Loaded appointments");
                AppointmentsState {
                    appointments,
                    is_loading: false,
                    error: None,
                }
            }
            Err(e) => {
                error!(
                    user_id = %user_id,
                    error = %redact(&e.to_string()),
                    "Failed to fetch appointments"
                );
                AppointmentsState {
                    appointments: Vec::new(),
                    is_loading: false,
                    error: Some(redact(FETCH_FAILED_MESSAGE)),
                }
            }
        };
        let applied = self.state.send_if_modified(|state| {
            if !self.is_current(generation) {
                return false;
            }
            *state = next;
            true
        });
        if !applied {
            debug!(user_id = %user_id, generation, "Discarding stale appointment response");
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}

impl<S> std::fmt::Debug for AppointmentsResource<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppointmentsResource")
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .field("state", &*self.state.borrow())
            .finish()
    }
}
