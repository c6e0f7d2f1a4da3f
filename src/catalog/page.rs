use std::ops::RangeInclusive;

/// One page of a listing. Page numbers start at 1.
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
	pub items: &'a [T],
	pub number: usize,
	pub total_pages: usize,
	pub total_items: usize,
	/// Zero-based offset of the first item.
	pub offset: usize,
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
	len.div_ceil(page_size.max(1))
}

/// Clamp a requested page into `1..=total_pages`; an empty listing has page 1.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
	page.clamp(1, total_pages.max(1))
}

pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
	let page_size = page_size.max(1);
	let total_pages = total_pages(items.len(), page_size);
	let number = clamp_page(page, total_pages);
	let offset = ((number - 1) * page_size).min(items.len());
	let end = (offset + page_size).min(items.len());
	Page {
		items: &items[offset..end],
		number,
		total_pages,
		total_items: items.len(),
		offset,
	}
}

impl<'a, T> Page<'a, T> {
	pub fn has_previous(&self) -> bool {
		self.number > 1
	}

	pub fn has_next(&self) -> bool {
		self.number < self.total_pages
	}

	/// Page numbers to link to: up to `size` pages starting half a window
	/// before the current one.
	pub fn window(&self, size: usize) -> RangeInclusive<usize> {
		let start = self.number.saturating_sub(size / 2).max(1);
		let end = self.total_pages.min(start + size.max(1) - 1);
		start..=end
	}

	/// "13-24 of 30"; "0-0 of 0" for an empty listing.
	pub fn range_label(&self) -> String {
		match self.items.is_empty() {
			true => format!("0-0 of {}", self.total_items),
			false => format!(
				"{}-{} of {}",
				self.offset + 1,
				self.offset + self.items.len(),
				self.total_items
			),
		}
	}
}
