// This file is part of step-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`StepVec`](crate::StepVec).
//!
//! - **Serialize**: as a sequence of the `len` live elements. Capacity is not
//!   part of the serialized form.
//! - **Deserialize**: from any sequence. The result starts from
//!   [`StepVec::new`](crate::StepVec::new) and is filled through `push_back`,
//!   so its capacity follows the usual additive growth.
//!
//! The element bound is [`Element`](crate::Element), so the default backend
//! additionally requires `T: Default`.

// Crate imports
use crate::vec::{Element, StepVec};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<T: Element + Serialize> Serialize for StepVec<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for VecVisitor<T>
where
    T: Deserialize<'de> + Element,
{
    type Value = StepVec<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("array or sequence of elements")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = StepVec::<T>::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.push_back(elem);
        }
        Ok(out)
    }
}

impl<'de, T> Deserialize<'de> for StepVec<T>
where
    T: Deserialize<'de> + Element,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T>(PhantomData))
    }
}
