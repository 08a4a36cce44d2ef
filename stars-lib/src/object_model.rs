mod repo;
mod star_record;

pub use self::repo::Repo;
pub use self::star_record::StarRecord;
