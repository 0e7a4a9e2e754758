// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{Appointment, Body, Error, IdAllocator, Interval, RecurrenceRequest, Selector};

/// The in-memory collection of appointments.
///
/// Appointments are kept sorted by start, end and identifier, and numbered
/// from 1 in that order. Every mutation either applies completely or leaves
/// the collection as it was.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    appointments: Vec<Appointment>,
}

impl Ledger {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        let mut ledger = Self { appointments };
        ledger.reorder();
        ledger
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Sorts the collection and renumbers it from 1.
    pub fn reorder(&mut self) {
        self.appointments.sort_by_key(Appointment::sort_key);
        self.renumber();
    }

    fn renumber(&mut self) {
        for (i, appointment) in self.appointments.iter_mut().enumerate() {
            appointment.set_display_number(i + 1);
        }
    }

    /// Looks up an appointment by its display number.
    pub fn get(&self, display_number: usize) -> Result<&Appointment, Error> {
        Ok(&self.appointments[self.index_of(display_number)?])
    }

    fn index_of(&self, display_number: usize) -> Result<usize, Error> {
        match display_number {
            n if (1..=self.appointments.len()).contains(&n) => Ok(n - 1),
            n => Err(Error::NotFound(n)),
        }
    }

    /// All stored appointments that conflict with `candidate`.
    pub fn conflicts(&self, candidate: &Appointment) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| candidate.is_conflict(a))
            .collect()
    }

    fn first_conflict(&self, candidate: &Appointment, skip: Option<usize>) -> Option<&Appointment> {
        self.appointments
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != skip)
            .map(|(_, a)| a)
            .find(|a| candidate.is_conflict(a))
    }

    /// Inserts a new appointment and returns its display number.
    pub fn add(&mut self, appointment: Appointment) -> Result<usize, Error> {
        if let Some(conflict) = self.first_conflict(&appointment, None) {
            return Err(Error::Overlap {
                conflicts: vec![conflict.clone()],
            });
        }

        tracing::debug!(interval = %appointment.interval(), "adding appointment");
        Ok(self.insert(appointment))
    }

    /// Moves an appointment to another interval and returns its new display number.
    pub fn reschedule(&mut self, display_number: usize, interval: Interval) -> Result<usize, Error> {
        let index = self.index_of(display_number)?;
        let mut moved = self.appointments[index].clone();
        moved.set_interval(interval);
        if let Some(conflict) = self.first_conflict(&moved, Some(index)) {
            return Err(Error::Overlap {
                conflicts: vec![conflict.clone()],
            });
        }

        tracing::debug!(display_number, %interval, "rescheduling appointment");
        self.appointments.remove(index);
        Ok(self.insert(moved))
    }

    /// Replaces the body of an appointment.
    pub fn change_body(&mut self, display_number: usize, body: Body) -> Result<(), Error> {
        let index = self.index_of(display_number)?;
        self.appointments[index].set_body(body);
        Ok(())
    }

    /// Appointments sharing a recurrence group with the given one, itself
    /// included. Empty when it belongs to no group.
    pub fn group_of(&self, display_number: usize) -> Result<Vec<&Appointment>, Error> {
        let target = self.get(display_number)?;
        if !target.in_group() {
            return Ok(Vec::new());
        }
        Ok(self
            .appointments
            .iter()
            .filter(|a| a.group_id() == target.group_id())
            .collect())
    }

    /// Removes an appointment and returns what was removed.
    ///
    /// Removing a recurrence base removes its whole group. A member of a group
    /// can only go together with its base.
    pub fn delete(&mut self, display_number: usize) -> Result<Vec<Appointment>, Error> {
        let index = self.index_of(display_number)?;
        let target = &self.appointments[index];

        if target.is_recurrence_member() {
            let group_id = target.group_id();
            if let Some(base) = self.appointments.iter().find(|a| a.id() == group_id) {
                return Err(Error::Recurrence(format!(
                    "appointment {display_number} belongs to the recurrence of appointment {}, delete that one instead",
                    base.display_number()
                )));
            }
            tracing::warn!(display_number, group_id, "deleting a recurrence member whose base is gone");
        }

        let removed = if target.is_recurrence_base() {
            let group_id = target.group_id();
            let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.appointments)
                .into_iter()
                .partition(|a| a.group_id() == group_id);
            self.appointments = kept;
            removed
        } else {
            vec![self.appointments.remove(index)]
        };

        tracing::debug!(display_number, count = removed.len(), "deleted appointments");
        self.renumber();
        Ok(removed)
    }

    /// Repeats an appointment and returns the new occurrences.
    ///
    /// The whole batch is rejected if any occurrence conflicts with a stored
    /// appointment. Each conflicting appointment is listed once.
    pub fn repeat(
        &mut self,
        display_number: usize,
        request: RecurrenceRequest,
        ids: &mut IdAllocator,
    ) -> Result<Vec<Appointment>, Error> {
        let index = self.index_of(display_number)?;
        let mut base = self.appointments[index].clone();
        if base.in_group() {
            return Err(Error::Recurrence(format!(
                "appointment {display_number} already belongs to a recurrence"
            )));
        }
        if !request.can_repeat(base.interval()) {
            return Err(Error::Recurrence(format!(
                "appointment {display_number} lasts too long to repeat every {}",
                request.unit().as_str().to_lowercase()
            )));
        }

        let occurrences = request.repeat_schedules(&mut base, ids);
        if occurrences.is_empty() {
            tracing::debug!(display_number, "no occurrence fits in the calendar");
            return Ok(occurrences);
        }

        // Both ends of every occurrence move by the same number of months, so
        // once the guard holds the occurrences never collide with each other.
        let mut colliding = vec![false; self.appointments.len()];
        for occurrence in &occurrences {
            for (i, other) in self.appointments.iter().enumerate() {
                if !colliding[i] && occurrence.is_conflict(other) {
                    colliding[i] = true;
                }
            }
        }
        let conflicts: Vec<Appointment> = self
            .appointments
            .iter()
            .zip(colliding)
            .filter_map(|(other, hit)| hit.then(|| other.clone()))
            .collect();
        if !conflicts.is_empty() {
            return Err(Error::Overlap { conflicts });
        }

        let group_id = base.group_id();
        self.appointments[index] = base;
        self.appointments.extend(occurrences);
        self.reorder();
        tracing::debug!(display_number, group_id, "repeated appointment");

        Ok(self
            .appointments
            .iter()
            .filter(|a| a.group_id() == group_id && !a.is_recurrence_base())
            .cloned()
            .collect())
    }

    /// Appointments overlapping the selected period, regardless of `allow_overlap`.
    pub fn select(&self, selector: &Selector) -> Vec<&Appointment> {
        let period = selector.interval();
        self.appointments
            .iter()
            .filter(|a| a.interval().overlaps(&period))
            .collect()
    }

    /// Gives every unsaved appointment an identifier.
    pub(crate) fn assign_ids(&mut self, ids: &mut IdAllocator) {
        for appointment in &mut self.appointments {
            appointment.ensure_id(ids);
        }
    }

    fn insert(&mut self, appointment: Appointment) -> usize {
        let key = appointment.sort_key();
        let index = self.appointments.partition_point(|a| a.sort_key() <= key);
        self.appointments.insert(index, appointment);
        self.renumber();
        index + 1
    }
}
