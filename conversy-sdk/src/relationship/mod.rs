//! Friend-relationship synchronization engine.
//!
//! Reconciles the three independently fetched collections (friends,
//! outgoing requests, recommended users) into one derived relationship
//! status per recommended user, and guards the send-request action so a
//! target can never receive a duplicate request from this client.
//!
//! The engine owns no I/O. Pages start the fetches, tag each result with
//! the epoch it was started under and feed it back through the `apply_*`
//! methods; results from a previous epoch (session reset) are discarded.

use std::collections::{HashMap, HashSet};

use yew::AttrValue;

use crate::error::Error;
use crate::model::friend::{FriendRequest, RelationshipStatus, RequestStatus};
use crate::model::user::User;

/// bumped on every session reset so in-flight results can be recognized
/// as stale and dropped
pub type Epoch = u32;

/// observable states of one read query; replaced wholesale on refetch,
/// never patched in place
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot<T> {
    Loading,
    Failed(AttrValue),
    Ready(Vec<T>),
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> Snapshot<T> {
    pub fn data(&self) -> Option<&[T]> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&AttrValue> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// per-target state of the send-request action, tracked separately from
/// the derived relationship status so a failed send can re-enable the
/// button without touching the projection
#[derive(Debug, Default, Clone, PartialEq)]
pub enum SendState {
    #[default]
    Idle,
    Pending,
    Error(AttrValue),
}

/// outcome of the optimistic guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendDecision {
    /// no request known for this target, caller should hit the network
    Proceed,
    /// a send for this target is already in flight
    AlreadyPending,
    /// target is already request-sent or friends
    AlreadyRelated,
}

/// what the caller must do after a send completed
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    /// success: refetch the outgoing snapshot, and only that one
    RefetchOutgoing,
    /// failure: lock released, surface the reason next to the target
    Failed(AttrValue),
    /// result belongs to a previous session, nothing was applied
    Stale,
}

/// pure projection of the three snapshots into a per-user status.
///
/// Recipient ids of pending outgoing requests are collected into a set
/// (duplicates deduplicate naturally); a friend id showing up in
/// `recommended` wins over request-sent, so the two can never be derived
/// for the same user even if the server recommendation filter slips.
pub fn project(
    recommended: &[User],
    outgoing: &[FriendRequest],
    friends: &[User],
) -> HashMap<AttrValue, RelationshipStatus> {
    let sent: HashSet<&AttrValue> = outgoing
        .iter()
        .filter(|req| req.status == RequestStatus::Pending)
        .map(|req| req.recipient.id())
        .collect();
    let friend_ids: HashSet<&AttrValue> = friends.iter().map(|user| &user.id).collect();

    recommended
        .iter()
        .map(|user| {
            let status = if friend_ids.contains(&user.id) {
                RelationshipStatus::Friends
            } else if sent.contains(&user.id) {
                RelationshipStatus::RequestSent
            } else {
                RelationshipStatus::None
            };
            (user.id.clone(), status)
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct RelationshipEngine {
    epoch: Epoch,
    friends: Snapshot<User>,
    outgoing: Snapshot<FriendRequest>,
    recommended: Snapshot<User>,
    in_flight: HashSet<AttrValue>,
    send_errors: HashMap<AttrValue, AttrValue>,
}

impl RelationshipEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// session reset (logout, account switch): every in-flight result
    /// started before this call will be rejected by the `apply_*` methods
    pub fn reset(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.friends = Snapshot::Loading;
        self.outgoing = Snapshot::Loading;
        self.recommended = Snapshot::Loading;
        self.in_flight.clear();
        self.send_errors.clear();
    }

    pub fn friends(&self) -> &Snapshot<User> {
        &self.friends
    }

    pub fn outgoing(&self) -> &Snapshot<FriendRequest> {
        &self.outgoing
    }

    pub fn recommended(&self) -> &Snapshot<User> {
        &self.recommended
    }

    /// returns whether the result was applied; a stale epoch means the
    /// session changed while the fetch was in flight
    pub fn apply_friends(&mut self, epoch: Epoch, result: Result<Vec<User>, Error>) -> bool {
        if epoch != self.epoch {
            log::debug!("dropping stale friends snapshot (epoch {epoch})");
            return false;
        }
        self.friends = Self::into_snapshot(result);
        true
    }

    pub fn apply_outgoing(
        &mut self,
        epoch: Epoch,
        result: Result<Vec<FriendRequest>, Error>,
    ) -> bool {
        if epoch != self.epoch {
            log::debug!("dropping stale outgoing snapshot (epoch {epoch})");
            return false;
        }
        self.outgoing = Self::into_snapshot(result);
        true
    }

    pub fn apply_recommended(&mut self, epoch: Epoch, result: Result<Vec<User>, Error>) -> bool {
        if epoch != self.epoch {
            log::debug!("dropping stale recommended snapshot (epoch {epoch})");
            return false;
        }
        self.recommended = Self::into_snapshot(result);
        true
    }

    /// derived mapping, recomputed from the current snapshots on every
    /// call; missing snapshots count as empty so the projection can run
    /// before all three reads finished
    pub fn project(&self) -> HashMap<AttrValue, RelationshipStatus> {
        project(
            self.recommended().data().unwrap_or_default(),
            self.outgoing().data().unwrap_or_default(),
            self.friends().data().unwrap_or_default(),
        )
    }

    pub fn status_of(&self, target: &AttrValue) -> RelationshipStatus {
        let sent = self
            .outgoing()
            .data()
            .unwrap_or_default()
            .iter()
            .any(|req| req.status == RequestStatus::Pending && req.recipient.id() == target);
        let friends = self
            .friends()
            .data()
            .unwrap_or_default()
            .iter()
            .any(|user| &user.id == target);
        if friends {
            RelationshipStatus::Friends
        } else if sent {
            RelationshipStatus::RequestSent
        } else {
            RelationshipStatus::None
        }
    }

    /// optimistic guard for the send-request action; only `Proceed` may
    /// be followed by a network call
    pub fn begin_send(&mut self, target: &AttrValue) -> SendDecision {
        if self.in_flight.contains(target) {
            return SendDecision::AlreadyPending;
        }
        if self.status_of(target) != RelationshipStatus::None {
            return SendDecision::AlreadyRelated;
        }
        self.send_errors.remove(target);
        self.in_flight.insert(target.clone());
        SendDecision::Proceed
    }

    /// releases the per-target lock and tells the caller what to do next
    pub fn finish_send(
        &mut self,
        epoch: Epoch,
        target: &AttrValue,
        result: Result<(), Error>,
    ) -> SendOutcome {
        if epoch != self.epoch {
            log::debug!("dropping stale send result for {target}");
            return SendOutcome::Stale;
        }
        self.in_flight.remove(target);
        match result {
            Ok(()) => SendOutcome::RefetchOutgoing,
            Err(err) => {
                let reason = AttrValue::from(err.to_string());
                self.send_errors.insert(target.clone(), reason.clone());
                SendOutcome::Failed(reason)
            }
        }
    }

    pub fn send_state(&self, target: &AttrValue) -> SendState {
        if self.in_flight.contains(target) {
            return SendState::Pending;
        }
        match self.send_errors.get(target) {
            Some(reason) => SendState::Error(reason.clone()),
            None => SendState::Idle,
        }
    }

    fn into_snapshot<T>(result: Result<Vec<T>, Error>) -> Snapshot<T> {
        match result {
            Ok(data) => Snapshot::Ready(data),
            Err(err) => Snapshot::Failed(err.to_string().into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::friend::RequestParty;

    fn user(id: &str) -> User {
        User {
            id: AttrValue::from(id.to_owned()),
            full_name: AttrValue::from(format!("user {id}")),
            ..Default::default()
        }
    }

    fn outgoing_req(recipient: &str) -> FriendRequest {
        FriendRequest {
            id: AttrValue::from(format!("req-{recipient}")),
            sender: RequestParty::Id("me".into()),
            recipient: RequestParty::Profile(Box::new(user(recipient))),
            status: RequestStatus::Pending,
            created_at: None,
        }
    }

    fn net_err() -> Error {
        Error::Network("connection refused".into())
    }

    #[test]
    fn projection_is_deterministic() {
        let recommended = vec![user("u1"), user("u2"), user("u3")];
        let outgoing = vec![outgoing_req("u2")];
        let first = project(&recommended, &outgoing, &[]);
        let second = project(&recommended, &outgoing, &[]);
        assert_eq!(first, second);
        assert_eq!(first[&AttrValue::from("u2")], RelationshipStatus::RequestSent);
        assert_eq!(first[&AttrValue::from("u1")], RelationshipStatus::None);
    }

    #[test]
    fn friends_win_over_request_sent() {
        // server policy violated: a friend shows up in the recommendations
        // and still has a pending outgoing request
        let recommended = vec![user("u1")];
        let outgoing = vec![outgoing_req("u1")];
        let friends = vec![user("u1")];
        let mapping = project(&recommended, &outgoing, &friends);
        assert_eq!(mapping[&AttrValue::from("u1")], RelationshipStatus::Friends);
    }

    #[test]
    fn empty_inputs_yield_empty_or_none() {
        assert!(project(&[], &[], &[]).is_empty());

        let recommended = vec![user("u1"), user("u2")];
        let mapping = project(&recommended, &[], &[]);
        assert_eq!(mapping.len(), 2);
        assert!(mapping
            .values()
            .all(|status| *status == RelationshipStatus::None));
    }

    #[test]
    fn duplicate_outgoing_recipients_deduplicate() {
        let recommended = vec![user("u1")];
        let outgoing = vec![outgoing_req("u1"), outgoing_req("u1")];
        let mapping = project(&recommended, &outgoing, &[]);
        assert_eq!(
            mapping[&AttrValue::from("u1")],
            RelationshipStatus::RequestSent
        );
    }

    #[test]
    fn accepted_requests_do_not_project_as_sent() {
        let recommended = vec![user("u1")];
        let mut req = outgoing_req("u1");
        req.status = RequestStatus::Accepted;
        let mapping = project(&recommended, &[req], &[]);
        assert_eq!(mapping[&AttrValue::from("u1")], RelationshipStatus::None);
    }

    #[test]
    fn second_send_for_same_target_is_rejected() {
        let mut engine = RelationshipEngine::new();
        let epoch = engine.epoch();
        engine.apply_recommended(epoch, Ok(vec![user("u1")]));
        engine.apply_outgoing(epoch, Ok(vec![]));
        engine.apply_friends(epoch, Ok(vec![]));

        let target = AttrValue::from("u1");
        assert_eq!(engine.begin_send(&target), SendDecision::Proceed);
        assert_eq!(engine.begin_send(&target), SendDecision::AlreadyPending);
        assert_eq!(engine.send_state(&target), SendState::Pending);
    }

    #[test]
    fn send_is_rejected_once_request_exists() {
        let mut engine = RelationshipEngine::new();
        let epoch = engine.epoch();
        engine.apply_outgoing(epoch, Ok(vec![outgoing_req("u1")]));
        engine.apply_friends(epoch, Ok(vec![user("u2")]));

        assert_eq!(
            engine.begin_send(&AttrValue::from("u1")),
            SendDecision::AlreadyRelated
        );
        assert_eq!(
            engine.begin_send(&AttrValue::from("u2")),
            SendDecision::AlreadyRelated
        );
    }

    #[test]
    fn successful_send_flips_status_after_refetch() {
        let mut engine = RelationshipEngine::new();
        let epoch = engine.epoch();
        engine.apply_recommended(epoch, Ok(vec![user("u42")]));
        engine.apply_outgoing(epoch, Ok(vec![]));
        engine.apply_friends(epoch, Ok(vec![]));

        let target = AttrValue::from("u42");
        assert_eq!(engine.status_of(&target), RelationshipStatus::None);
        assert_eq!(engine.begin_send(&target), SendDecision::Proceed);
        assert_eq!(
            engine.finish_send(epoch, &target, Ok(())),
            SendOutcome::RefetchOutgoing
        );

        // the targeted refetch lands
        engine.apply_outgoing(epoch, Ok(vec![outgoing_req("u42")]));
        assert_eq!(engine.project()[&target], RelationshipStatus::RequestSent);
        assert_eq!(engine.send_state(&target), SendState::Idle);
    }

    #[test]
    fn sends_to_distinct_targets_are_independent() {
        let mut engine = RelationshipEngine::new();
        let epoch = engine.epoch();
        engine.apply_recommended(epoch, Ok(vec![user("u1"), user("u2")]));
        engine.apply_outgoing(epoch, Ok(vec![]));
        engine.apply_friends(epoch, Ok(vec![]));

        let (u1, u2) = (AttrValue::from("u1"), AttrValue::from("u2"));
        assert_eq!(engine.begin_send(&u1), SendDecision::Proceed);
        assert_eq!(engine.begin_send(&u2), SendDecision::Proceed);

        // u2 fails, u1 succeeds; neither outcome touches the other target
        assert!(matches!(
            engine.finish_send(epoch, &u2, Err(net_err())),
            SendOutcome::Failed(_)
        ));
        assert_eq!(
            engine.finish_send(epoch, &u1, Ok(())),
            SendOutcome::RefetchOutgoing
        );

        engine.apply_outgoing(epoch, Ok(vec![outgoing_req("u1")]));
        let mapping = engine.project();
        assert_eq!(mapping[&u1], RelationshipStatus::RequestSent);
        assert_eq!(mapping[&u2], RelationshipStatus::None);
        assert!(matches!(engine.send_state(&u2), SendState::Error(_)));
    }

    #[test]
    fn failed_send_releases_the_lock() {
        let mut engine = RelationshipEngine::new();
        let epoch = engine.epoch();
        engine.apply_recommended(epoch, Ok(vec![user("u1")]));
        engine.apply_outgoing(epoch, Ok(vec![]));
        engine.apply_friends(epoch, Ok(vec![]));

        let target = AttrValue::from("u1");
        assert_eq!(engine.begin_send(&target), SendDecision::Proceed);
        assert!(matches!(
            engine.finish_send(epoch, &target, Err(net_err())),
            SendOutcome::Failed(_)
        ));

        // user may retry; the error is cleared when the retry starts
        assert_eq!(engine.begin_send(&target), SendDecision::Proceed);
        assert_eq!(engine.send_state(&target), SendState::Pending);
    }

    #[test]
    fn stale_session_results_are_discarded() {
        let mut engine = RelationshipEngine::new();
        let old_epoch = engine.epoch();
        let target = AttrValue::from("u1");
        engine.apply_recommended(old_epoch, Ok(vec![user("u1")]));
        engine.apply_outgoing(old_epoch, Ok(vec![]));
        engine.apply_friends(old_epoch, Ok(vec![]));
        assert_eq!(engine.begin_send(&target), SendDecision::Proceed);

        engine.reset();

        assert!(!engine.apply_friends(old_epoch, Ok(vec![user("stale")])));
        assert!(!engine.apply_outgoing(old_epoch, Ok(vec![outgoing_req("u9")])));
        assert!(!engine.apply_recommended(old_epoch, Ok(vec![user("stale")])));
        assert_eq!(
            engine.finish_send(old_epoch, &target, Ok(())),
            SendOutcome::Stale
        );

        assert!(engine.friends().is_loading());
        assert!(engine.outgoing().is_loading());
        assert!(engine.recommended().is_loading());
        assert_eq!(engine.send_state(&target), SendState::Idle);
    }

    #[test]
    fn fetch_failure_surfaces_per_collection() {
        let mut engine = RelationshipEngine::new();
        let epoch = engine.epoch();
        engine.apply_friends(epoch, Err(net_err()));
        engine.apply_recommended(epoch, Ok(vec![user("u1")]));

        assert!(engine.friends().error().is_some());
        assert!(engine.recommended().data().is_some());
        // projection still runs on what is available
        assert_eq!(
            engine.project()[&AttrValue::from("u1")],
            RelationshipStatus::None
        );
    }
}
