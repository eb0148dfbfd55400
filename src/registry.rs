use std::{
    any::{Any, TypeId},
    io::Write,
};

use crate::{Properties, decoder, encoder, error::Error, parse::PropertyMap};

/// A registered record type, usable through type-erased values.
///
/// Created by `#[derive(Properties)]` for non-generic structs, or by
/// [`submit_record!`](crate::submit_record) for manual implementations.
pub struct RegisteredRecord {
    pub id: fn() -> TypeId,
    pub name: fn() -> &'static str,
    pub decode: fn(&mut dyn Any, &PropertyMap) -> Result<(), Error>,
    pub encode: fn(&dyn Any, &mut dyn Write) -> Result<(), Error>,
}

impl RegisteredRecord {
    pub const fn new<T: Properties>() -> Self {
        Self {
            id: || TypeId::of::<T>(),
            name: || std::any::type_name::<T>(),
            decode: |value, values| {
                let record = value.downcast_mut::<T>().ok_or(Error::NotAStruct)?;
                decoder::assign_fields(record, values)
            },
            encode: |value, writer| {
                let record = value.downcast_ref::<T>().ok_or(Error::NotAStruct)?;
                encoder::write_fields(record, writer)
            },
        }
    }
}

impl std::fmt::Debug for RegisteredRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredRecord")
            .field("name", &(self.name)())
            .finish_non_exhaustive()
    }
}

inventory::collect!(RegisteredRecord);

/// Finds the registration for the record type `id`, if any.
pub fn lookup(id: TypeId) -> Option<&'static RegisteredRecord> {
    inventory::iter::<RegisteredRecord>
        .into_iter()
        .find(|registration| (registration.id)() == id)
}

#[macro_export]
macro_rules! submit_record {
    ($record_type:ty) => {
        $crate::inventory::submit! {
            $crate::RegisteredRecord::new::<$record_type>()
        }
    };
}
