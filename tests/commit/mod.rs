mod commit_links_to_previous_head;
